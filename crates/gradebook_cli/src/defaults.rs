//! External collaborators supplied by the application layer: the course
//! catalog, the valid section labels, and the first-run seed set. The core
//! treats all three as opaque configuration.

use gradebook_core::{Course, CourseCatalog, StudentRecord};

/// Section labels accepted by the form surface.
pub const SECTIONS: [&str; 3] = ["Alpha", "Beta", "Gamma"];

/// Records installed on first run and after a reset.
pub fn seed_records() -> Vec<StudentRecord> {
    Vec::new()
}

/// The fixed course catalog.
pub fn course_catalog() -> CourseCatalog {
    CourseCatalog::new(vec![
        course(
            "c-js",
            "JavaScript Fundamentals",
            6,
            "Beginner",
            "Syntax, data types, DOM, events, projects.",
        ),
        course(
            "c-py",
            "Python for Developers",
            8,
            "Beginner",
            "Problem solving, OOP, file I/O, modules.",
        ),
        course(
            "c-cpp",
            "C++ with STL",
            8,
            "Intermediate",
            "Pointers, templates, STL, performance.",
        ),
        course(
            "c-dsa",
            "Data Structures & Algorithms",
            10,
            "Intermediate",
            "Arrays, lists, trees, graphs, DP.",
        ),
        course(
            "c-web",
            "Full-Stack Web (HTML/CSS/JS)",
            10,
            "Beginner",
            "Responsive layouts, forms, fetch, CRUD.",
        ),
    ])
}

fn course(id: &str, title: &str, weeks: u32, level: &str, description: &str) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        weeks,
        level: level.to_string(),
        description: description.to_string(),
    }
}
