use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use nutriplanner_core::{MealPlanner, MealPlannerBuilder, PlannerError, Result, TextGenerator};

/// Scripted reply for one generation call.
pub enum Reply {
    Text(String),
    Fail(String),
}

/// Generator that replays scripted replies and records every prompt it gets.
pub struct FakeGenerator {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    fn model_name(&self) -> &str {
        "fake-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(message)) => Err(PlannerError::generation(message).build()),
            None => Err(PlannerError::generation("no scripted reply left").build()),
        }
    }
}

/// Helper function to create a planner backed by scripted replies.
///
/// Returns the planner and a handle to the prompts it received.
pub fn create_test_planner(replies: Vec<Reply>) -> (MealPlanner, Arc<Mutex<Vec<String>>>) {
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let generator = FakeGenerator {
        replies: Mutex::new(replies.into()),
        prompts: Arc::clone(&prompts),
    };
    let planner = MealPlannerBuilder::new()
        .with_generator(generator)
        .build()
        .expect("Failed to create planner");
    (planner, prompts)
}
