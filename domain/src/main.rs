use std::env;
use std::process;

use domain::id::SequenceIdGenerator;
use domain::{Recipe, RecipeStore, ShoppingItem, ShoppingListStore};

fn print_usage() {
    eprintln!(
        "{}\n\nUsage:\n  domain shopping [add <name> [--checked]]\n  domain recipes [add <name> <ingredient>...]\n\nNotes:\n  - This demo CLI uses seeded in-memory stores; data is not persisted across runs.",
        domain::about()
    );
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1); // skip program name

    let Some(cmd) = args.next() else {
        print_usage();
        return Ok(());
    };

    match cmd.as_str() {
        "shopping" => {
            let store = ShoppingListStore::seeded(SequenceIdGenerator::new("item"));
            match args.next().as_deref() {
                None => {}
                Some("add") => {
                    let Some(name) = args.next() else {
                        return Err("missing <name> for add".into());
                    };
                    let mut checked = false;
                    for arg in args {
                        match arg.as_str() {
                            "--checked" => checked = true,
                            unk => return Err(format!("unknown argument: {}", unk)),
                        }
                    }
                    let item = ShoppingItem::new(name, checked).map_err(|e| e.to_string())?;
                    let created = store.add(item).map_err(|e| format!("add failed: {}", e))?;
                    println!("added: {}", created.id);
                }
                Some(unk) => return Err(format!("unknown argument: {}", unk)),
            }
            for r in store.list_all() {
                let mark = if r.fields.checked { "x" } else { " " };
                println!("[{}] {}  ({})", mark, r.fields.name, r.id);
            }
            Ok(())
        }
        "recipes" => {
            let store = RecipeStore::seeded(SequenceIdGenerator::new("recipe"));
            match args.next().as_deref() {
                None => {}
                Some("add") => {
                    let Some(name) = args.next() else {
                        return Err("missing <name> for add".into());
                    };
                    let recipe = Recipe::new(name, args.collect()).map_err(|e| e.to_string())?;
                    let created = store
                        .add(recipe)
                        .map_err(|e| format!("add failed: {}", e))?;
                    println!("added: {}", created.id);
                }
                Some(unk) => return Err(format!("unknown argument: {}", unk)),
            }
            for r in store.list_all() {
                println!(
                    "{}: {}  ({})",
                    r.fields.name,
                    r.fields.ingredients.join(", "),
                    r.id
                );
            }
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn main() {
    if let Err(msg) = run() {
        eprintln!("error: {}", msg);
        process::exit(1);
    }
}
