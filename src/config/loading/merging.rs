use toml::{Value, map::Map};

/// Merges configuration layers, later layers taking precedence
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers
        .into_iter()
        .fold(Value::Table(Map::new()), merge_two_layers)
}

/// Deep merges two layers while preserving precedence
///
/// Starts from overlay and adds the keys it does not set from base. Tables
/// are merged recursively; any other value in overlay, arrays included,
/// replaces the base value outright.
pub fn merge_two_layers(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            let mut merged_table = overlay_table;

            for (key, base_value) in base_table {
                let merged_value = match merged_table.remove(&key) {
                    None => base_value,
                    Some(overlay_value) => merge_two_layers(base_value, overlay_value),
                };
                merged_table.insert(key, merged_value);
            }

            Value::Table(merged_table)
        }
        (_, overlay) => overlay,
    }
}
