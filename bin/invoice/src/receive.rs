use crate::constants::{DELETE_CANCELED, DELETE_PROMPT};
use crate::error::CliError;
use crate::prompt::Confirm;
use api::{InvoiceApi, Transport};
use common::ReceiveItem;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Flags of the `receive` command
#[derive(Debug, Clone, Default)]
pub struct ReceiveOptions {
    pub unread: bool,
    /// Print the item list instead of writing files
    pub json: bool,
    /// Delete the received items from the remote afterwards
    pub delete: bool,
    /// Skip the confirmation before remote deletion
    pub assume_yes: bool,
    pub dest: Option<PathBuf>,
}

/// Write each item to disk, in order
pub fn save_items(items: &[ReceiveItem], dest: Option<&Path>) -> Result<Vec<PathBuf>, CliError> {
    items
        .iter()
        .map(|item| {
            let path = codec::decode_to_file(
                &item.file_name,
                &item.payload,
                item.encoding.as_deref(),
                dest,
            )?;
            info!("{} saved to {}", item.file_name, path.display());
            Ok(path)
        })
        .collect()
}

/// Print items as a single JSON line
pub fn print_json<S: serde::Serialize + ?Sized>(
    value: &S,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out).map_err(CliError::Output)
}

/// Fetch pending documents, materialize or print them, then optionally
/// delete them remotely. Returns the received items.
pub fn receive<T: Transport>(
    api: &InvoiceApi<T>,
    options: &ReceiveOptions,
    prompt: &mut dyn Confirm,
    out: &mut dyn Write,
) -> Result<Vec<ReceiveItem>, CliError> {
    let items = api.receive(options.unread)?;
    debug!("{} item(s) received", items.len());

    if options.json {
        print_json(&items, out)?;
    } else {
        save_items(&items, options.dest.as_deref())?;
    }

    if options.delete && !items.is_empty() {
        if !options.assume_yes && !prompt.confirm(DELETE_PROMPT)? {
            writeln!(out, "{}", DELETE_CANCELED).map_err(CliError::Output)?;
            return Ok(items);
        }
        for item in &items {
            api.delete(item.id)?;
        }
    }

    Ok(items)
}
