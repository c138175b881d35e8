/// Default API host
pub const DEFAULT_HOST: &str = "https://api.invoicetronic.com";

/// Default API version segment (`/v1/...`)
pub const DEFAULT_API_VERSION: u32 = 1;

pub const HOST_ENV: &str = "INVOICE_HOST";
pub const APIKEY_ENV: &str = "INVOICE_APIKEY";
pub const VERSION_ENV: &str = "INVOICE_VERSION";
pub const VERBOSE_ENV: &str = "INVOICE_VERBOSE";

/// Log filter applied with --verbose
pub const VERBOSE_FILTER: &str = "warn,invoice=debug,api=debug,codec=debug";

/// Log filter applied otherwise
pub const DEFAULT_FILTER: &str = "warn";

pub const DELETE_PROMPT: &str = "Are you sure you want to remotely delete the documents?";
pub const DELETE_CANCELED: &str = "Remote delete canceled.";
