use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::settings::{
    DEFAULT_ORDER_BY, DEFAULT_PAGE_SIZE, DEFAULT_RECORD_TYPE, DEFAULT_STATUS,
};
use crate::domain::{RecordFilter, SortOrder};
use crate::pagination::PageSpec;
use crate::transforms::TargetField;

#[derive(Parser, Debug)]
#[command(author, version, about = "paginated batch mutations over content records")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Reset the database schema, optionally importing seed records
    Setup {
        #[command(flatten)]
        store: StoreArgs,

        /// JSON array of records to import after the reset
        #[arg(long)]
        seed_file: Option<PathBuf>,
    },
    /// Count the records matching the filter
    Count {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Collapse runs of whitespace in matching records
    Normalize {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Replace text in matching records
    Replace {
        /// Text (or pattern, with --regex) to look for
        #[arg(long)]
        find: String,

        /// Replacement text
        #[arg(long)]
        replace: String,

        /// Which field(s) to rewrite
        #[arg(long, value_enum, default_value_t = FieldArg::Both)]
        field: FieldArg,

        /// Treat --find as a regular expression
        #[arg(long)]
        regex: bool,

        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct StoreArgs {
    /// SQLite database path (falls back to DATABASE_PATH, then content_sweep.db)
    #[arg(long)]
    pub database: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct FilterArgs {
    /// Record type to match
    #[arg(long, default_value = DEFAULT_RECORD_TYPE)]
    pub record_type: String,

    /// Record status to match ("any" disables the status predicate)
    #[arg(long, default_value = DEFAULT_STATUS)]
    pub status: String,

    /// Column to order the walk by
    #[arg(long, default_value = DEFAULT_ORDER_BY)]
    pub order_by: String,

    /// Walk direction
    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    pub order: OrderArg,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PageArgs {
    /// Records per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Page to start from
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Stop after this many records regardless of the total
    #[arg(long)]
    pub max_records: Option<usize>,

    /// Report would-be updates without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Asc,
    Desc,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArg {
    Title,
    Body,
    Both,
}

impl FilterArgs {
    pub fn to_filter(&self) -> RecordFilter {
        RecordFilter {
            record_type: self.record_type.clone(),
            status: self.status.clone(),
            order_by: self.order_by.clone(),
            order: match self.order {
                OrderArg::Asc => SortOrder::Asc,
                OrderArg::Desc => SortOrder::Desc,
            },
        }
    }
}

impl PageArgs {
    pub fn to_page_spec(&self) -> PageSpec {
        PageSpec::new().with_size(self.page_size).with_number(self.page)
    }
}

impl From<FieldArg> for TargetField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Title => TargetField::Title,
            FieldArg::Body => TargetField::Body,
            FieldArg::Both => TargetField::Both,
        }
    }
}
