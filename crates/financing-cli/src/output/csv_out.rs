use serde_json::Value;
use std::io;

/// Write output as CSV to stdout. Comparison results emit the year-wise
/// series in long format (one row per year and strategy); anything else
/// falls back to field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value.get("result").unwrap_or(value);

    if let Some(rows) = result.get("yearly").and_then(Value::as_array) {
        let _ = wtr.write_record([
            "year",
            "strategy",
            "interest_paid_net",
            "investment_value",
            "investment_gain_gross",
            "investment_gain_after_tax",
            "net_cost",
        ]);
        for row in rows {
            let year = row.get("year").map(format_csv_value).unwrap_or_default();
            let entries = row
                .get("scenarios")
                .and_then(Value::as_array)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            for entry in entries {
                let _ = wtr.write_record([
                    year.clone(),
                    field(entry, "strategy"),
                    field(entry, "interest_paid_net"),
                    field(entry, "investment_value"),
                    field(entry, "investment_gain_gross"),
                    field(entry, "investment_gain_after_tax"),
                    field(entry, "net_cost"),
                ]);
            }
        }
    } else {
        match result {
            Value::Object(map) => {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.clone(), format_csv_value(val)]);
                }
            }
            Value::Array(arr) => {
                write_array_csv(&mut wtr, arr);
            }
            _ => {
                let _ = wtr.write_record([format_csv_value(result)]);
            }
        }
    }

    let _ = wtr.flush();
}

fn field(entry: &Value, key: &str) -> String {
    entry.get(key).map(format_csv_value).unwrap_or_default()
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
