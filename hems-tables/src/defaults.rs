//! Built-in reference tables
//!
//! CAVS from ISO 7243 (Table B.1), clothing resistance from ISO 9920 and
//! metabolic classes from ISO 8996. The hood increment is not part of the
//! CAVS entries; it is added at assessment time.

use serde_json::{json, Value};

/// Default tables as JSON, in the same shape `from_json_str` accepts
pub fn tables_json() -> Value {
    json!({
        "cavs": [
            { "ensemble": "Work clothes (woven shirt and trousers)", "cavs_c": 0.0 },
            { "ensemble": "Woven coveralls", "cavs_c": 0.0 },
            { "ensemble": "Double-layer woven clothing", "cavs_c": 3.0 },
            { "ensemble": "SMS nonwoven coveralls", "cavs_c": 0.5 },
            { "ensemble": "Polyolefin nonwoven coveralls", "cavs_c": 1.0 },
            { "ensemble": "Limited-use vapour-barrier coveralls", "cavs_c": 11.0 }
        ],
        "clothing": [
            { "ensemble": "Underpants, short-sleeved shirt, light trousers, socks, shoes", "iclo": 0.08 },
            { "ensemble": "Underpants, shirt, trousers, socks, shoes", "iclo": 0.10 },
            { "ensemble": "Underpants, coverall, socks, shoes", "iclo": 0.11 },
            { "ensemble": "Underwear, shirt, coverall, socks, shoes", "iclo": 0.13 },
            { "ensemble": "Underwear, shirt, trousers, smock, socks, shoes", "iclo": 0.14 },
            { "ensemble": "Underwear, shirt, trousers, jacket, socks, shoes", "iclo": 0.155 },
            { "ensemble": "Underwear with long legs and sleeves, shirt, trousers, jacket, socks, shoes", "iclo": 0.20 }
        ],
        "metabolic": [
            { "activity": "Resting", "rate_w_m2": 65.0 },
            { "activity": "Low metabolic rate", "rate_w_m2": 100.0 },
            { "activity": "Moderate metabolic rate", "rate_w_m2": 165.0 },
            { "activity": "High metabolic rate", "rate_w_m2": 230.0 },
            { "activity": "Very high metabolic rate", "rate_w_m2": 290.0 }
        ]
    })
}
