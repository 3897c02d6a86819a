use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse, Role};
use fabula_crew::{Crew, CrewExecutor, RoleSpec, TaskSpec, story_crew};
use fabula_error::{BackendError, FabulaResult};
use fabula_interface::FabulaDriver;
use std::sync::Mutex;

/// Mock driver that replays a fixed script of responses and records every
/// request it receives.
struct ScriptedDriver {
    script: Vec<String>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedDriver {
    fn new(script: &[&str]) -> Self {
        Self {
            script: script.iter().map(|s| s.to_string()).collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn request(&self, index: usize) -> GenerateRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl FabulaDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        let mut requests = self.requests.lock().unwrap();
        let index = requests.len();
        requests.push(req.clone());

        let text = self
            .script
            .get(index)
            .cloned()
            .ok_or_else(|| BackendError::new(format!("No scripted response for call {}", index)))?;

        Ok(GenerateResponse::builder().text(text).build().unwrap())
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model-v1"
    }
}

/// Mock driver that fails on a chosen call.
struct FailingDriver {
    fail_on: usize,
    calls: Mutex<usize>,
}

impl FailingDriver {
    fn new(fail_on: usize) -> Self {
        Self {
            fail_on,
            calls: Mutex::new(0),
        }
    }

    fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl FabulaDriver for FailingDriver {
    async fn generate(&self, _req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;

        if *calls == self.fail_on {
            return Err(BackendError::new("Simulated generation failure").into());
        }

        Ok(GenerateResponse::builder()
            .text(format!("Response {}", *calls))
            .build()
            .unwrap())
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn model_name(&self) -> &str {
        "failing-model-v1"
    }
}

const SCRIPT: [&str; 4] = [
    "THE PLOT OUTLINE",
    "THE CHARACTER PROFILES",
    "THE STORY DRAFT",
    "THE FINAL EDITED STORY",
];

fn user_prompt(req: &GenerateRequest) -> String {
    req.messages()
        .iter()
        .filter(|m| *m.role() == Role::User)
        .map(|m| m.content().clone())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn executes_all_four_tasks_in_role_order() {
    let executor = CrewExecutor::new(ScriptedDriver::new(&SCRIPT));
    let crew = story_crew();

    let result = executor
        .execute(&crew, "A short sci-fi story about a rogue AI discovering emotions")
        .await
        .expect("Execution failed");

    assert_eq!(executor.driver().call_count(), 4);
    assert_eq!(result.task_executions.len(), 4);

    let task_names: Vec<&str> = result
        .task_executions
        .iter()
        .map(|t| t.task_name.as_str())
        .collect();
    assert_eq!(task_names, vec!["plot", "characters", "scenes", "editing"]);

    let role_names: Vec<&str> = result
        .task_executions
        .iter()
        .map(|t| t.role_name.as_str())
        .collect();
    assert_eq!(
        role_names,
        vec![
            "Plot Architect",
            "Character Crafter",
            "Scene Weaver",
            "Narrative Editor"
        ]
    );

    for (index, execution) in result.task_executions.iter().enumerate() {
        assert_eq!(execution.sequence_number, index);
        assert_eq!(execution.response, SCRIPT[index]);
    }
}

#[tokio::test]
async fn later_prompts_embed_all_prior_outputs_verbatim() {
    let executor = CrewExecutor::new(ScriptedDriver::new(&SCRIPT));
    let crew = story_crew();

    executor
        .execute(&crew, "a rogue AI discovering emotions")
        .await
        .expect("Execution failed");

    // First call carries the story prompt, no context yet.
    let first = user_prompt(&executor.driver().request(0));
    assert!(first.contains("a rogue AI discovering emotions"));
    assert!(!first.contains(SCRIPT[0]));

    // Every later call carries the verbatim outputs of all prior calls.
    for call in 1..4 {
        let prompt = user_prompt(&executor.driver().request(call));
        for prior in &SCRIPT[..call] {
            assert!(
                prompt.contains(prior),
                "Call {} should contain the output {:?}",
                call,
                prior
            );
        }
        for later in &SCRIPT[call..] {
            assert!(!prompt.contains(*later));
        }
    }
}

#[tokio::test]
async fn final_output_is_the_fourth_response() {
    let executor = CrewExecutor::new(ScriptedDriver::new(&SCRIPT));
    let crew = story_crew();

    let result = executor
        .execute(&crew, "a rogue AI")
        .await
        .expect("Execution failed");

    assert_eq!(result.final_output(), Some("THE FINAL EDITED STORY"));
    assert_eq!(result.crew_name, "story_writing");
}

#[tokio::test]
async fn failure_on_second_call_stops_the_run() {
    let executor = CrewExecutor::new(FailingDriver::new(2));
    let crew = story_crew();

    let result = executor.execute(&crew, "a rogue AI").await;

    assert!(result.is_err());
    assert_eq!(executor.driver().call_count(), 2);
}

#[tokio::test]
async fn persona_rides_in_the_system_message() {
    let executor = CrewExecutor::new(ScriptedDriver::new(&SCRIPT));
    let crew = story_crew();

    executor
        .execute(&crew, "a rogue AI")
        .await
        .expect("Execution failed");

    let request = executor.driver().request(0);
    let system = &request.messages()[0];
    assert_eq!(*system.role(), Role::System);
    assert!(system.content().contains("Plot Architect"));
    assert!(system.content().contains("Your personal goal is:"));
}

#[tokio::test]
async fn temperature_and_model_override_reach_the_driver() {
    let roles = vec![
        RoleSpec::builder()
            .name("a")
            .goal("g")
            .backstory("b")
            .model(Some("mistral".to_string()))
            .build()
            .unwrap(),
        RoleSpec::builder().name("b").goal("g").backstory("b").build().unwrap(),
        RoleSpec::builder().name("c").goal("g").backstory("b").build().unwrap(),
        RoleSpec::builder().name("d").goal("g").backstory("b").build().unwrap(),
    ];
    let tasks = vec![
        TaskSpec::builder()
            .name("t1")
            .template("Start with \"{story_prompt}\"")
            .expected_output("o")
            .output_file("t1.txt")
            .build()
            .unwrap(),
        TaskSpec::builder()
            .name("t2")
            .template("continue")
            .expected_output("o")
            .depends_on(vec!["t1".to_string()])
            .output_file("t2.txt")
            .build()
            .unwrap(),
        TaskSpec::builder()
            .name("t3")
            .template("continue")
            .expected_output("o")
            .output_file("t3.txt")
            .build()
            .unwrap(),
        TaskSpec::builder()
            .name("t4")
            .template("finish")
            .expected_output("o")
            .output_file("t4.txt")
            .build()
            .unwrap(),
    ];
    let crew = Crew::new("custom", "", roles, tasks).unwrap();

    let executor = CrewExecutor::new(ScriptedDriver::new(&SCRIPT)).with_temperature(0.2);
    executor.execute(&crew, "prompt").await.expect("Execution failed");

    let first = executor.driver().request(0);
    assert_eq!(*first.temperature(), Some(0.2));
    assert_eq!(*first.model(), Some("mistral".to_string()));

    let second = executor.driver().request(1);
    assert_eq!(*second.model(), None);
}

#[tokio::test]
async fn executor_driver_access() {
    let executor = CrewExecutor::new(ScriptedDriver::new(&SCRIPT));

    assert_eq!(executor.driver().provider_name(), "scripted");
    assert_eq!(executor.driver().model_name(), "scripted-model-v1");
}
