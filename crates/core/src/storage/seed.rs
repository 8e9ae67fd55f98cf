use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::models::account::Account;
use crate::models::stock::UserStock;
use crate::models::trade::{Trade, TradeSide};
use crate::models::user::{Credential, User};
use crate::services::auth_service;

use super::database::Database;

/// Sentinel user: when this id exists, the store is considered seeded.
const SEED_SENTINEL: &str = "user01";

/// Demo password shared by every seeded user.
const SEED_PASSWORD: &str = "1234";

const USERS: [(&str, &str); 6] = [
    ("user01", "이경희"),
    ("user02", "김우진"),
    ("user03", "이준혁"),
    ("user04", "김영철"),
    ("user05", "박정훈"),
    ("user06", "김승현"),
];

const ACCOUNTS: [(&str, i64); 6] = [
    ("user01", 2_016_927),
    ("user02", 1_712_552),
    ("user03", 460_250),
    ("user04", 4_222_369),
    ("user05", 5_030_360),
    ("user06", 1_371_179),
];

/// (user, name, code, quantity, avg_price, current_price, total_value,
/// profit_loss, profit_rate)
#[rustfmt::skip]
const STOCKS: [(&str, &str, &str, u32, i64, i64, i64, i64, &str); 14] = [
    ("user01", "한미약품",         "128940", 27, 116_924, 114_084, 3_080_268,  -76_680, "-2.43%"),
    ("user01", "현대차",           "5380",   15, 118_202, 113_256, 1_698_840,  -74_190, "-4.18%"),
    ("user01", "NAVER",            "35420",   4,  85_124,  92_003,   368_012,   27_516, "8.08%"),
    ("user02", "HMM",              "11200",  22,  82_313,  89_549, 1_970_078,  159_192, "8.79%"),
    ("user02", "삼성바이오로직스", "207940",  4,  61_152,  64_039,   256_156,   11_548, "4.72%"),
    ("user03", "신한지주",         "55550",   7,  69_155,  76_199,   533_393,   49_308, "10.19%"),
    ("user04", "포스코홀딩스",     "5490",   66,  95_160,  98_424, 6_495_984,  215_424, "3.43%"),
    ("user04", "셀트리온",         "68270",   1,  54_104,  61_972,    61_972,    7_868, "14.54%"),
    ("user04", "삼성바이오로직스", "207940",  3,  77_284,  86_723,   260_169,   28_317, "12.21%"),
    ("user05", "HMM",              "11200",  70,  58_765,  60_997, 4_269_790,  156_240, "3.80%"),
    ("user06", "HMM",              "11200",  84, 114_002, 114_620, 9_628_080,   51_912, "0.54%"),
    ("user06", "한화에어로스페이스", "12450", 2,  67_379,  66_562,   133_124,   -1_634, "-1.21%"),
    ("user06", "한국전력",         "15760",  36,  57_991,  60_828, 2_189_808,  102_132, "4.89%"),
    ("user06", "한미약품",         "128940", 54,  66_240,  75_343, 4_068_522,  491_562, "13.74%"),
];

/// (id, user, account, name, code, executed_at, side, quantity, price,
/// description)
#[rustfmt::skip]
const TRADES: [(&str, &str, &str, &str, &str, &str, TradeSide, u32, i64, &str); 5] = [
    ("1", "user01", "1111-1111", "한미약품", "128940", "2022-01-08 09:56", TradeSide::Buy,  10, 122_443, "기관 매수세 확인 후 동참"),
    ("2", "user01", "1111-1111", "NAVER",    "35420",  "2022-01-22 12:47", TradeSide::Buy,  10,  83_694, "주가 조정 구간에서 2차 매수 진입"),
    ("3", "user01", "1111-1111", "현대차",   "5380",   "2022-06-25 10:11", TradeSide::Buy,   6, 113_344, "우량주 분할 매수 전략으로 첫 진입"),
    ("4", "user01", "1111-1111", "한미약품", "128940", "2022-11-10 13:55", TradeSide::Sell,  4, 116_060, "장기 보유 목적으로 리밸런싱"),
    ("5", "user01", "1111-1111", "NAVER",    "35420",  "2022-11-11 15:07", TradeSide::Buy,   8,  89_287, "급락에 따른 저가 매수 대응"),
];

/// Seed the store with the fixed reference dataset on first run.
///
/// Idempotent: when `user01` already exists the call is a no-op and returns
/// `false`. A record that fails to build (bad timestamp, failed credential
/// hash) is logged and skipped — seeding itself never fails.
pub async fn ensure_seed_data(db: &Database) -> bool {
    if db.get_user(SEED_SENTINEL).await.is_some() {
        debug!("seed data already present, skipping");
        return false;
    }

    info!("seeding reference data");

    for (id, name) in USERS {
        db.put_user(User::new(id, name)).await;

        match auth_service::hash_password(SEED_PASSWORD) {
            Ok(password_hash) => {
                db.put_credential(Credential {
                    user_id: id.to_string(),
                    password_hash,
                })
                .await;
            }
            Err(e) => warn!(user_id = id, error = %e, "skipping credential seed"),
        }
    }

    for (user_id, deposit) in ACCOUNTS {
        db.put_account(Account::new(user_id, deposit)).await;
    }

    for (user_id, name, code, quantity, avg, current, total, pl, rate) in STOCKS {
        db.put_user_stock(UserStock {
            user_id: user_id.to_string(),
            stock_code: code.to_string(),
            stock_name: name.to_string(),
            quantity,
            avg_price: avg,
            current_price: current,
            total_value: total,
            profit_loss: pl,
            profit_rate: rate.to_string(),
        })
        .await;
    }

    for (id, user_id, account, name, code, at, side, quantity, price, desc) in TRADES {
        let executed_at = match NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M") {
            Ok(dt) => dt,
            Err(e) => {
                warn!(trade_id = id, error = %e, "skipping trade seed: bad timestamp");
                continue;
            }
        };
        db.put_trade(Trade {
            id: id.to_string(),
            user_id: user_id.to_string(),
            account_number: account.to_string(),
            stock_name: name.to_string(),
            stock_code: code.to_string(),
            executed_at,
            side,
            quantity,
            price,
            description: desc.to_string(),
        })
        .await;
    }

    info!(
        users = USERS.len(),
        stocks = STOCKS.len(),
        trades = TRADES.len(),
        "seed complete"
    );
    true
}
