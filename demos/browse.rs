//! Walk through the bundled collection
//!
//! Run with: cargo run --example browse
//!
//! Pass a seed file to browse it instead: cargo run --example browse -- seed.json

use simplepedia::{ArticleStore, Config, Session, View};
use tracing_subscriber::EnvFilter;

fn print_view(view: &View) {
    println!("Sections: {}", view.sections.join(" "));

    match (&view.section, &view.titles) {
        (Some(section), Some(titles)) => {
            println!("  [{}]", section);
            for title in titles {
                println!("    {}", title);
            }
        }
        _ => {
            if let Some(prompt) = &view.prompt {
                println!("  {}", prompt);
            }
        }
    }

    if let Some(article) = &view.article {
        println!();
        println!("  {}", article.title());
        println!("  {}", article.extract());
        if let Some(edited) = &view.edited {
            println!("  Last edited {}", edited);
        }
    }

    if let Some(draft) = &view.draft {
        println!();
        println!("  Editing: title={:?} extract={:?}", draft.title, draft.extract);
        println!("  Save {}", if view.can_save { "enabled" } else { "disabled" });
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = match std::env::args().nth(1) {
        Some(path) => ArticleStore::from_seed_file(path, Config::default())?,
        None => ArticleStore::bundled(Config::default())?,
    };
    println!("Loaded {} articles", store.len());

    let mut session = Session::new(store);
    print_view(&session.view());

    let Some(section) = session.view().sections.first().cloned() else {
        println!("Nothing to browse");
        return Ok(());
    };
    session.choose_section(&section)?;
    print_view(&session.view());

    if let Some(title) = session.store().index().titles_in_section(&section).first() {
        session.choose_title(title)?;
        print_view(&session.view());

        session.edit_article()?;
        session.set_draft_extract("Rewritten during the demo.")?;
        print_view(&session.view());
        let updated = session.save()?;
        println!("Saved '{}' at {}", updated.title(), updated.edited());
    }

    session.new_article();
    session.set_draft_title("Quokka")?;
    session.set_draft_extract("A small wallaby found on Rottnest Island.")?;
    print_view(&session.view());
    session.save()?;

    session.choose_section("Q")?;
    print_view(&session.view());

    Ok(())
}
