use crate::error::CliError;
use crate::receive::{print_json, save_items};
use api::{InvoiceApi, Transport};
use common::ReceiveItem;
use std::io::Write;
use std::path::PathBuf;

/// Flags of the `get` command
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    pub json: bool,
    pub dest: Option<PathBuf>,
}

/// Fetch one document by id and either print it or write it to disk
pub fn get<T: Transport>(
    api: &InvoiceApi<T>,
    id: i64,
    options: &GetOptions,
    out: &mut dyn Write,
) -> Result<ReceiveItem, CliError> {
    let item = api.get(id)?;
    if options.json {
        print_json(&item, out)?;
    } else {
        save_items(std::slice::from_ref(&item), options.dest.as_deref())?;
    }
    Ok(item)
}
