use serde_json::{json, Value};

/// An index entry with only a path.
pub fn path_item(path: &str) -> Value {
    json!({ "path": path })
}

/// An index entry with a name and a path.
pub fn named_item(name: &str, path: &str) -> Value {
    json!({ "name": name, "path": path })
}

/// `count` entries per category under `assets/images/<category>/`.
pub fn foldered_index(categories: &[&str], count: usize) -> Value {
    let items: Vec<Value> = categories
        .iter()
        .flat_map(|cat| {
            (1..=count).map(move |i| path_item(&format!("assets/images/{cat}/{cat}-{i}.png")))
        })
        .collect();
    Value::Array(items)
}

/// Write `contents` to `relative` under `root`, creating parent directories.
pub fn write_file(root: &std::path::Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(&path, contents).expect("write file");
}
