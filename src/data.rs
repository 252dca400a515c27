//! Bundled content used whenever the store has no materials/questions yet.

use crate::models::domain::{Material, Question};

/// The portal's fixed subject labels.
pub const SUBJECTS: [&str; 5] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Computer Science",
];

fn material(
    id: &str,
    title: &str,
    content: &str,
    image_url: Option<&str>,
    pdf_url: Option<&str>,
    video_url: Option<&str>,
    subject: &str,
) -> Material {
    Material {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        image_url: image_url.map(str::to_string),
        pdf_url: pdf_url.map(str::to_string),
        video_url: video_url.map(str::to_string),
        subject: subject.to_string(),
        created_by: None,
        created_at: None,
    }
}

fn question(
    id: &str,
    text: &str,
    options: &[&str],
    correct_answer: usize,
    explanation: &str,
    subject: &str,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
        subject: subject.to_string(),
        created_by: None,
        created_at: None,
    }
}

pub fn default_materials() -> Vec<Material> {
    vec![
        material(
            "1",
            "Introduction to Algorithms",
            "An algorithm is a finite sequence of well-defined steps that \
             solves a class of problems. Correctness and running time are the \
             two properties every analysis starts from.",
            Some("https://images.example.com/algorithms.jpg"),
            Some("https://docs.example.com/algorithms-intro.pdf"),
            Some("https://videos.example.com/embed/algorithms-intro"),
            "Computer Science",
        ),
        material(
            "2",
            "Memory and Pointers",
            "A pointer stores the address of a value rather than the value \
             itself. Understanding indirection is the key to linked data \
             structures and to how call stacks work.",
            Some("https://images.example.com/pointers.jpg"),
            None,
            Some("https://videos.example.com/embed/memory-pointers"),
            "Computer Science",
        ),
        material(
            "3",
            "Linear Equations",
            "A linear equation in one unknown has the form ax + b = 0. \
             Isolating the unknown with inverse operations solves it in two \
             steps.",
            None,
            None,
            None,
            "Mathematics",
        ),
    ]
}

pub fn default_questions() -> Vec<Question> {
    vec![
        question(
            "1",
            "What is the value of x in the equation 3x - 6 = 6?",
            &["2", "4", "6", "12"],
            1,
            "Add 6 to both sides to get 3x = 12, then divide by 3: x = 4.",
            "Mathematics",
        ),
        question(
            "2",
            "A rectangle has sides of length 3 and 5. What is its perimeter?",
            &["8", "16", "15", "30"],
            1,
            "The perimeter is twice the sum of the side lengths: 2 × (3 + 5) = 16.",
            "Mathematics",
        ),
        question(
            "3",
            "Which data structure gives O(1) average-case lookup by key?",
            &["Linked list", "Hash table", "Binary heap", "Stack"],
            1,
            "A hash table maps a key to a bucket index directly, so lookups \
             do not depend on the number of stored entries.",
            "Computer Science",
        ),
        question(
            "4",
            "What does a stable sorting algorithm guarantee?",
            &[
                "It never allocates extra memory",
                "Equal elements keep their relative order",
                "It always runs in O(n log n)",
                "It sorts in place",
            ],
            1,
            "Stability only concerns the relative order of elements that \
             compare equal; it says nothing about time or space.",
            "Computer Science",
        ),
        question(
            "5",
            "A ball is dropped from rest. Ignoring air resistance, what is \
             its speed after 2 seconds?",
            &["4.9 m/s", "9.8 m/s", "19.6 m/s", "39.2 m/s"],
            2,
            "Speed under constant acceleration is v = gt, so 9.8 × 2 = 19.6 m/s.",
            "Physics",
        ),
    ]
}
