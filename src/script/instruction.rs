use serde::Deserialize;

/// One step of a JSON script. Scripts are arrays of objects tagged by
/// `"op"`, e.g.
/// `{"op":"add","map":"segments","from":10,"to":30,"amount":1}` or
/// `{"op":"print","map":"segments"}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Instruction {
    Add {
        map: String,
        from: i64,
        to: i64,
        amount: i64,
    },
    Set {
        map: String,
        from: i64,
        to: i64,
        amount: i64,
    },
    Print {
        map: String,
    },
}
