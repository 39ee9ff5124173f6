use super::{Activity, Catalog};

/// The activities offered at process start.
pub fn seed_catalog() -> Catalog {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        // Sports
        (
            "Futebol",
            Activity::new("Treinos de futebol", "Segundas e Quartas, 15:00 - 17:00", 30),
        ),
        (
            "Volei",
            Activity::new("Treinos de volei", "Terças e Quintas, 15:00 - 17:00", 30),
        ),
        // Arts
        (
            "Teatro",
            Activity::new("Aulas de teatro", "Terças e Quintas, 14:00 - 16:00", 20),
        ),
        (
            "Dança",
            Activity::new("Aulas de dança", "Segundas e Quartas, 14:00 - 16:00", 20),
        ),
        // Academic
        (
            "Debate",
            Activity::new("Aulas de debate", "Quartas, 14:00 - 16:00", 20),
        ),
        (
            "Clube do Livro",
            Activity::new("Clube do livro", "Sextas, 14:00 - 16:00", 20),
        ),
    ]
    .into_iter()
    .collect()
}
