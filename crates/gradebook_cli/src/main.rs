use anyhow::{bail, Context};
use clap::Parser;
use gradebook_core::db::open_db;
use gradebook_core::{
    by_section, default_log_level, filter_and_sort, format_course_list, init_logging,
    progress_percent, score_badge, snapshot, top_by_score, RosterQuery, RosterStore, Score,
    SqliteRosterRepository, StudentRecord,
};
use log::info;
use std::path::PathBuf;

mod cli;
mod defaults;
mod output;

use cli::{Cli, Commands};
use output::{print_one, print_out};

const PROGRESS_BAR_WIDTH: usize = 20;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    let log_dir = data_dir.join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let conn = open_db(data_dir.join("gradebook.db"))?;
    let mut store = RosterStore::open(SqliteRosterRepository::new(&conn), defaults::seed_records())?;
    store.seed_if_empty()?;

    let catalog = defaults::course_catalog();
    info!(
        "event=cli_command module=cli status=start command={}",
        command_name(&cli.command)
    );

    match cli.command {
        Commands::Add {
            name,
            student_id,
            section,
            contact,
            courses,
            score,
            remarks,
        } => {
            let record = StudentRecord {
                name: name.trim().to_string(),
                student_id: student_id.trim().to_string(),
                section: checked_section(&section)?,
                contact: contact.trim().to_string(),
                courses,
                score: Score::from_input(score),
                remarks: remarks.trim().to_string(),
            };
            store.create(record.clone())?;
            print_one(cli.json, &record, |r| format!("added {}", r.student_id))?;
        }
        Commands::Edit {
            student_id,
            name,
            new_id,
            section,
            contact,
            courses,
            score,
            clear_score,
            remarks,
        } => {
            let Some(existing) = store.find(&student_id).cloned() else {
                bail!("student not found: {student_id}");
            };

            let mut candidate = existing;
            if let Some(name) = name {
                candidate.name = name.trim().to_string();
            }
            if let Some(new_id) = new_id {
                candidate.student_id = new_id.trim().to_string();
            }
            if let Some(section) = section {
                candidate.section = checked_section(&section)?;
            }
            if let Some(contact) = contact {
                candidate.contact = contact.trim().to_string();
            }
            if !courses.is_empty() {
                candidate.courses = courses;
            }
            if clear_score {
                candidate.score = Score::Ungraded;
            } else if let Some(score) = score {
                candidate.score = Score::graded(score);
            }
            if let Some(remarks) = remarks {
                candidate.remarks = remarks.trim().to_string();
            }

            store.update(&student_id, candidate.clone())?;
            print_one(cli.json, &candidate, |r| {
                format!("updated {}", r.student_id)
            })?;
        }
        Commands::Remove { student_id } => {
            store.delete(&student_id)?;
            print_one(cli.json, &student_id, |id| format!("removed {id}"))?;
        }
        Commands::Show { student_id } => {
            let Some(record) = store.find(&student_id) else {
                bail!("student not found: {student_id}");
            };
            if cli.json {
                print_one(true, record, |_| String::new())?;
            } else {
                println!("name: {}", record.name);
                println!("id: {}", record.student_id);
                println!("section: {}", record.section);
                println!("contact: {}", record.contact);
                println!("courses: {}", format_course_list(&record.courses, &catalog));
                println!("score: {}", score_badge(record.score).label);
                if !record.remarks.is_empty() {
                    println!("remarks: {}", record.remarks);
                }
            }
        }
        Commands::List { search, sort, dir } => {
            let query = RosterQuery {
                search,
                sort_key: sort.into(),
                sort_dir: dir.into(),
            };
            let rows = filter_and_sort(store.records(), &query);
            print_out(cli.json, &rows, |r| {
                format!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    r.name,
                    r.student_id,
                    r.section,
                    r.contact,
                    format_course_list(&r.courses, &catalog),
                    score_badge(r.score).label
                )
            })?;
        }
        Commands::Results { section } => {
            let section = section.map(|s| checked_section(&s)).transpose()?;
            let scoped = by_section(store.records(), section.as_deref());
            let snap = snapshot(&scoped);
            if cli.json {
                print_one(true, &snap, |_| String::new())?;
            } else {
                let average = snap
                    .average
                    .map_or_else(|| "—".to_string(), |avg| avg.to_string());
                println!("Average: {average}");
                for record in &snap.records {
                    println!(
                        "{}\t{} • {}\t{}",
                        record.name,
                        record.student_id,
                        record.section,
                        render_bar(record.score)
                    );
                }
            }
        }
        Commands::Top { limit } => {
            let rows = top_by_score(store.records(), limit);
            print_out(cli.json, &rows, |r| {
                format!(
                    "{}\t{} • {}\t{}",
                    r.name,
                    r.student_id,
                    r.section,
                    render_bar(r.score)
                )
            })?;
        }
        Commands::Courses => {
            print_out(cli.json, catalog.courses(), |c| {
                format!(
                    "{}\t{}\t{}\t{} weeks\t{}",
                    c.id, c.title, c.level, c.weeks, c.description
                )
            })?;
        }
        Commands::Export { out } => {
            let json = store.export_json()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    print_one(cli.json, path.display().to_string(), |p| {
                        format!("exported {p}")
                    })?;
                }
                None => println!("{json}"),
            }
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("reset discards all students and reinstalls the seed data; pass --yes to confirm");
            }
            let reseeded = store.reset_to_seed()?.len();
            print_one(cli.json, reseeded, |count| {
                format!("reset complete, {count} seed records installed")
            })?;
        }
    }

    Ok(())
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Add { .. } => "add",
        Commands::Edit { .. } => "edit",
        Commands::Remove { .. } => "remove",
        Commands::Show { .. } => "show",
        Commands::List { .. } => "list",
        Commands::Results { .. } => "results",
        Commands::Top { .. } => "top",
        Commands::Courses => "courses",
        Commands::Export { .. } => "export",
        Commands::Reset { .. } => "reset",
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let dir = match flag {
        Some(dir) => dir,
        None => {
            let home = std::env::var("HOME").context("HOME is not set; pass --data-dir")?;
            PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("gradebook")
        }
    };
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(std::env::current_dir()?.join(dir))
    }
}

fn checked_section(value: &str) -> anyhow::Result<String> {
    let value = value.trim();
    if defaults::SECTIONS.contains(&value) {
        return Ok(value.to_string());
    }
    bail!(
        "unknown section `{value}`; expected one of: {}",
        defaults::SECTIONS.join(", ")
    )
}

fn render_bar(score: Score) -> String {
    let pct = progress_percent(score) as usize;
    let filled = pct * PROGRESS_BAR_WIDTH / 100;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled),
        score_badge(score).label
    )
}
