use crate::config::SourceConfig;

pub const DSN_DISPLAY_WIDTH: usize = 60;
pub const ACTIVE_MARKER: &str = "*";
const ELLIPSIS: &str = "...";

/// One line of the `ls` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub marker: &'static str,
    pub name: String,
    pub db: String,
    pub dsn: String,
}

impl SourceRow {
    pub fn is_active(&self) -> bool {
        !self.marker.is_empty()
    }
}

/// Build display rows for every source, in stored order.
pub fn source_rows(config: &SourceConfig) -> Vec<SourceRow> {
    config
        .sources
        .iter()
        .map(|source| SourceRow {
            marker: if source.name == config.active_source {
                ACTIVE_MARKER
            } else {
                ""
            },
            name: source.name.clone(),
            db: source.db.clone(),
            dsn: truncate_dsn(&source.dsn),
        })
        .collect()
}

/// Cap `dsn` at [`DSN_DISPLAY_WIDTH`] characters, appending `...` when cut.
pub fn truncate_dsn(dsn: &str) -> String {
    match dsn.char_indices().nth(DSN_DISPLAY_WIDTH) {
        Some((idx, _)) => format!("{}{}", &dsn[..idx], ELLIPSIS),
        None => dsn.to_string(),
    }
}
