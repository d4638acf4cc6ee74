use clap::{Parser, Subcommand, ValueEnum};
use gradebook_core::{SortDir, SortKey};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gradebook", version, about = "Student roster manager CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Data directory (defaults to ~/.local/share/gradebook)"
    )]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student record
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "id")]
        student_id: String,
        #[arg(long)]
        section: String,
        #[arg(long)]
        contact: String,
        #[arg(long = "course", value_name = "COURSE_ID")]
        courses: Vec<String>,
        #[arg(long)]
        score: Option<f64>,
        #[arg(long, default_value = "")]
        remarks: String,
    },
    /// Edit the record identified by its current student id
    Edit {
        student_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "id")]
        new_id: Option<String>,
        #[arg(long)]
        section: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long = "course", value_name = "COURSE_ID")]
        courses: Vec<String>,
        #[arg(long)]
        score: Option<f64>,
        #[arg(long, conflicts_with = "score")]
        clear_score: bool,
        #[arg(long)]
        remarks: Option<String>,
    },
    /// Remove a student record
    Remove { student_id: String },
    /// Show one student record
    Show { student_id: String },
    /// List records with search and ordering
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum, default_value_t = SortField::Name)]
        sort: SortField,
        #[arg(long, value_enum, default_value_t = Direction::Asc)]
        dir: Direction,
    },
    /// Section result summary with average and progress bars
    Results {
        #[arg(long)]
        section: Option<String>,
    },
    /// Top performers by score
    Top {
        #[arg(long, default_value_t = 6)]
        limit: usize,
    },
    /// List the course catalog
    Courses,
    /// Export the roster as a JSON document
    Export {
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Discard all records and reinstall the seed data
    Reset {
        #[arg(long, help = "Confirm the destructive reset")]
        yes: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortField {
    Name,
    Id,
    Section,
    Contact,
    Score,
}

impl From<SortField> for SortKey {
    fn from(value: SortField) -> Self {
        match value {
            SortField::Name => SortKey::Name,
            SortField::Id => SortKey::StudentId,
            SortField::Section => SortKey::Section,
            SortField::Contact => SortKey::Contact,
            SortField::Score => SortKey::Score,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for SortDir {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Asc => SortDir::Asc,
            Direction::Desc => SortDir::Desc,
        }
    }
}
