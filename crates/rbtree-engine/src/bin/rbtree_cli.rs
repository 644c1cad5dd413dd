//! `rbtree-cli` — apply one command to a persisted red-black tree.
//!
//! Usage:
//!   rbtree-cli <state-file> <command> [value]
//!
//! Commands: `insert <int>`, `delete <int>`, `random`, `reset`. Any other
//! command leaves the tree untouched and just reports the current state.
//!
//! The engine state is loaded from the state file (a fresh tree when the
//! file does not exist yet), the command is applied, the updated state is
//! written back, and `{"tree": ..., "stats": ...}` is printed on stdout.

use std::path::Path;

use rbtree_engine::RbTree;
use serde_json::json;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (state_path, command) = match (args.get(1), args.get(2)) {
        (Some(path), Some(command)) => (path.clone(), command.clone()),
        _ => {
            eprintln!("Usage: rbtree-cli <state-file> <command> [value]");
            std::process::exit(1);
        }
    };
    let value = args.get(3).map(String::as_str);

    let mut tree = match load(Path::new(&state_path)) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match (command.as_str(), value) {
        ("insert", Some(v)) => tree.insert_raw(v),
        ("delete", Some(v)) => {
            // Same boundary rule as insert: non-numeric input is dropped.
            if let Ok(key) = v.trim().parse::<i64>() {
                tree.delete(key);
            }
        }
        ("random", _) => tree.insert_random(),
        ("reset", _) => tree.reset(),
        // Unrecognized commands report the current state read-only.
        _ => {}
    }

    if let Err(e) = store(Path::new(&state_path), &tree) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let doc = json!({
        "tree": tree.snapshot(),
        "stats": tree.stats(),
    });
    println!("{doc}");
}

fn load(path: &Path) -> Result<RbTree, String> {
    if !path.exists() {
        return Ok(RbTree::new());
    }
    let bytes = std::fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
    RbTree::from_bytes(&bytes).map_err(|e| format!("{}: {e}", path.display()))
}

fn store(path: &Path, tree: &RbTree) -> Result<(), String> {
    let bytes = tree.to_bytes().map_err(|e| e.to_string())?;
    std::fs::write(path, bytes).map_err(|e| format!("{}: {e}", path.display()))
}
