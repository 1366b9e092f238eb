use mockexam_config::exam::question::{Difficulty, Question};

pub fn question(id: u32, category: &str, difficulty: Difficulty) -> Question {
    Question {
        id,
        question: format!("{category} question {id}?"),
        options: [
            "Option A".to_owned(),
            "Option B".to_owned(),
            "Option C".to_owned(),
            "Option D".to_owned(),
        ],
        correct_answer: u8::try_from(id % 4).unwrap().try_into().unwrap(),
        explanation: Some(format!("Explanation for {id}")),
        section: None,
        difficulty,
        topic: format!("{category} topic"),
        category: category.to_owned(),
    }
}

/// Bank with `size` questions per category, ids numbered from 1 across the
/// whole bank and difficulties cycling basic, intermediate, advanced.
pub fn bank(sizes: &[(&str, usize)]) -> Vec<Question> {
    const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Basic, Difficulty::Intermediate, Difficulty::Advanced];
    let mut questions = Vec::new();
    let mut id = 1;
    for &(category, size) in sizes {
        for i in 0..size {
            questions.push(question(id, category, DIFFICULTIES[i % 3]));
            id += 1;
        }
    }
    questions
}

pub fn categories(names: &[&str]) -> Vec<String> {
    names.iter().map(|&name| name.to_owned()).collect()
}
