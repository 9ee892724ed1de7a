//! Lenient accessors for API records.
//!
//! Missing or mistyped values degrade to `0`, `0.`, `""` or `[]`
//! instead of failing.

use serde_json::Value;

pub(crate) fn int_value(v: Option<&Value>) -> i64 {
    match v {
        Some(Value::Number(n)) => n.as_i64()
            .or_else(|| n.as_f64().map(|x| x as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>().ok()
                .or_else(|| s.parse::<f64>().ok().map(|x| x as i64))
                .unwrap_or(0)
        }
        Some(Value::Bool(b)) => *b as i64,
        _ => 0,
    }
}

pub(crate) fn float_value(v: Option<&Value>) -> f64 {
    match v {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.),
        Some(Value::Bool(b)) => if *b { 1. } else { 0. },
        _ => 0.,
    }
}

pub(crate) fn string_value(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn array_value(v: Option<&Value>) -> &[Value] {
    match v {
        Some(Value::Array(a)) => a,
        _ => &[],
    }
}
