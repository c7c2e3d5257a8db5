//! Rollbook CLI
//!
//! Command-line interface over a student data file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rollbook::persistence::{self, LoadOutcome};
use rollbook::sort::{self, Direction, SortKey};
use rollbook::stats;
use rollbook::{Config, Database, SortCriterion, Student};
use tracing_subscriber::{fmt, EnvFilter};

/// Rollbook CLI
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(about = "Manage student records, grades and statistics")]
#[command(version)]
struct Args {
    /// Data file
    #[arg(short, long, default_value = rollbook::config::DEFAULT_DATA_FILE)]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all students
    List,

    /// Show one student and their courses
    Find {
        roll_number: u32,
    },

    /// Add a student
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        roll_number: i64,
        #[arg(allow_negative_numbers = true)]
        marks: f64,
    },

    /// Change a student's name and marks
    Modify {
        roll_number: u32,
        name: String,
        marks: f64,
    },

    /// Remove a student
    Remove {
        roll_number: u32,
    },

    /// Add a course result to a student
    AddCourse {
        roll_number: u32,
        course: String,
        score: f64,
    },

    /// Remove a course from a student
    RemoveCourse {
        roll_number: u32,
        course: String,
    },

    /// Sort the stored order
    Sort {
        /// Field to sort by
        #[arg(long, value_enum, default_value_t = Field::Marks)]
        by: Field,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Print statistics
    Stats,

    /// Export to CSV
    Export {
        path: PathBuf,
    },

    /// Write a backup copy next to the data file
    Backup {
        #[arg(default_value = "students_backup.txt")]
        name: String,
    },

    /// Add the sample students
    Seed,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Field {
    Marks,
    Name,
    Roll,
}

impl From<Field> for SortKey {
    fn from(field: Field) -> Self {
        match field {
            Field::Marks => SortKey::Marks,
            Field::Name => SortKey::Name,
            Field::Roll => SortKey::RollNumber,
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rollbook=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> rollbook::Result<()> {
    let backup_dir = args
        .data
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();

    let config = Config::builder()
        .data_file(&args.data)
        .backup_dir(backup_dir)
        .build()?;

    let db = Database::open(config)?;
    if let LoadOutcome::NoData = db.load_outcome() {
        tracing::info!("starting with an empty store");
    }

    let mutated = match args.command {
        Commands::List => {
            print_table(db.store().iter_active());
            false
        }
        Commands::Find { roll_number } => {
            match db.store().find(roll_number) {
                Some(student) => print_student(student),
                None => println!("Student with roll number {} not found.", roll_number),
            }
            false
        }
        Commands::Add {
            name,
            roll_number,
            marks,
        } => {
            db.store().add(&name, roll_number, marks)?;
            println!("Student added.");
            true
        }
        Commands::Modify {
            roll_number,
            name,
            marks,
        } => {
            let mut store = db.store();
            let student = store.modify(roll_number, &name, marks)?;
            println!("Student updated: marks {:.2} ({}).", student.marks(), student.status());
            true
        }
        Commands::Remove { roll_number } => {
            let removed = db.store().remove(roll_number)?;
            println!("Removed {} ({}).", removed.name(), removed.roll_number());
            true
        }
        Commands::AddCourse {
            roll_number,
            course,
            score,
        } => {
            let mut store = db.store();
            let student = store.add_course(roll_number, &course, score)?;
            println!(
                "Course added. Marks now {:.2}, GPA {:.2}.",
                student.marks(),
                student.gpa()
            );
            true
        }
        Commands::RemoveCourse { roll_number, course } => {
            db.store().remove_course(roll_number, &course)?;
            println!("Course removed.");
            true
        }
        Commands::Sort { by, desc } => {
            let direction = if desc {
                Direction::Descending
            } else {
                Direction::Ascending
            };
            let criterion = SortCriterion::new(by.into(), direction);
            let mut store = db.store();
            sort::sort(&mut store, criterion);
            print_table(store.iter_active());
            true
        }
        Commands::Stats => {
            print_statistics(&db);
            false
        }
        Commands::Export { path } => {
            let written = db.export_csv(&path)?;
            println!("Exported {} records to {}.", written, path.display());
            false
        }
        Commands::Backup { name } => {
            let path = db.backup(&name)?;
            println!("Backup written to {}.", path.display());
            false
        }
        Commands::Seed => {
            let mut store = db.store();
            let added = persistence::initialize_sample_data(&mut store, db.data_file())?;
            println!("Added {} sample students.", added);
            false
        }
    };

    if mutated {
        db.save()?;
    }
    db.close()
}

fn print_table<'a>(students: impl Iterator<Item = &'a Student>) {
    println!("{:<15} {:<30} {:<10} {:<10}", "Roll Number", "Name", "Marks", "Status");
    println!("{:<15} {:<30} {:<10} {:<10}", "----------", "----", "-----", "------");

    let mut total = 0;
    for student in students {
        println!(
            "{:<15} {:<30} {:<10.2} {:<10}",
            student.roll_number(),
            student.name(),
            student.marks(),
            student.status().as_str()
        );
        total += 1;
    }
    println!("\nTotal students: {}", total);
}

fn print_student(student: &Student) {
    println!("Name:        {}", student.name());
    println!("Roll Number: {}", student.roll_number());
    println!("Marks:       {:.2} ({})", student.marks(), student.grade());
    println!("Status:      {}", student.status());

    if student.has_courses() {
        println!("GPA:         {:.2}", student.gpa());
        for course in student.courses() {
            println!(
                "  {:<30} {:>6.2}  {}  {}",
                course.name(),
                course.score(),
                course.grade(),
                course.status()
            );
        }
    }
}

fn print_statistics(db: &Database) {
    let store = db.store();
    let summary = stats::calculate_statistics(&store);

    println!("=== Statistics ===");
    println!("Total Students:     {}", summary.total_count);
    println!("Average Marks:      {:.2}", summary.average);
    println!("Median Marks:       {:.2}", stats::median_marks(&store));
    println!("Standard Deviation: {:.2}", stats::standard_deviation(&store));
    println!("Highest Marks:      {:.2}", summary.highest);
    println!("Lowest Marks:       {:.2}", summary.lowest);
    println!("Passed Students:    {}", summary.passed_count);
    println!("Failed Students:    {}", summary.failed_count);
    println!("Pass Percentage:    {:.1}%", summary.pass_percentage);
    println!("Average GPA:        {:.2}", stats::average_gpa(&store));

    if let Some(top) = stats::highest_scorer(&store) {
        println!(
            "Top Scorer:         {} (Roll: {}, Marks: {:.2})",
            top.name(),
            top.roll_number(),
            top.marks()
        );
    }

    println!("Grade Distribution:");
    for (grade, count) in stats::grade_distribution(&store).iter() {
        println!("  {}: {}", grade, count);
    }
}
