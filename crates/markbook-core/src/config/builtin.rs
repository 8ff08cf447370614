/// Subjects the analysis surface recognizes.
pub const SUBJECTS: &[&str] = &[
    "Apply Python Programming Fundamentals",
    "Develop a Backend Application using Node.js",
    "Develop Frontend Application using React.JS",
    "Develop Mobile Application using Flutter",
    "Develop NoSQL Database",
    "Apply JavaScript",
    "Apply C Programming Fundamentals",
    "Apply C++ Programming",
    "Apply Data Structures and Algorithms using C",
];

pub fn is_known_subject(name: &str) -> bool {
    SUBJECTS.iter().any(|s| *s == name.trim())
}
