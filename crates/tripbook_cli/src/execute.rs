//! One command against the stored address book.
//!
//! # Responsibility
//! - Rebuild the model from storage, including the predicates the previous
//!   run left on each view, so display indices keep their meaning.
//! - Persist data only for mutating commands, and view predicates only when
//!   they changed.
//!
//! # Invariants
//! - A failed command writes nothing.

use anyhow::Context;
use log::info;
use rusqlite::Connection;
use std::fmt::Write;
use tripbook_core::{AddressBookRepository, Command, ModelManager, SqliteAddressBookRepository};

use crate::render;

/// What a run printed and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Feedback line followed by both rendered views.
    pub output: String,
    pub data_saved: bool,
    pub view_saved: bool,
}

pub fn run_command(conn: &mut Connection, command: &dyn Command) -> anyhow::Result<RunReport> {
    let mut repo = SqliteAddressBookRepository::try_new(conn)?;
    let mut model = ModelManager::from_snapshot(repo.load()?)
        .context("stored address book contains duplicates")?;
    let stored_view = repo.load_view_state()?;
    model.restore_view_state(stored_view.clone());

    let result = command.execute(&mut model)?;

    let mut output = String::new();
    writeln!(output, "{}", result.feedback())?;
    render::render_views(&model, &mut output)?;

    let data_saved = command.mutates_data();
    if data_saved {
        repo.save(&model.snapshot())
            .context("failed to save address book")?;
    }
    let view = model.view_state();
    let view_saved = view != stored_view;
    if view_saved {
        repo.save_view_state(&view)
            .context("failed to save view filters")?;
    }

    info!("event=cli_run module=cli status=ok mutated={data_saved} view_saved={view_saved}");
    Ok(RunReport {
        output,
        data_saved,
        view_saved,
    })
}
