use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

/// Helper function to create a temporary directory for CLI tests, so no
/// stray `.env` file is picked up.
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a clean
/// environment
fn nutriplanner_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nutriplanner").expect("Failed to find nutriplanner binary");
    cmd.current_dir(dir.path())
        .env_remove("GOOGLE_API_KEY")
        .env_remove("NUTRIPLANNER_MODEL")
        .env_remove("NUTRIPLANNER_ENDPOINT")
        .env_remove("NUTRIPLANNER_TIMEOUT_SECS")
        .arg("--no-color");
    cmd
}

/// Helper function to build a successful generateContent response body
fn reply_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

#[test]
fn test_cli_options_lists_goals_and_meals() {
    let dir = create_cli_test_environment();

    nutriplanner_cmd(&dir)
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("`diabetes`: Controle da Diabetes"))
        .stdout(predicate::str::contains("Lanche da Tarde"))
        .stdout(predicate::str::contains("1 a 12 semanas"));
}

#[test]
fn test_cli_prompt_needs_no_key() {
    let dir = create_cli_test_environment();

    nutriplanner_cmd(&dir)
        .args([
            "prompt",
            "--mode",
            "weeks",
            "--weeks",
            "2",
            "--meal",
            "Almoço",
            "--goal",
            "hypertension",
            "--likes",
            "bacon",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("para 14 dias"))
        .stdout(predicate::str::contains("refeições: Almoço."))
        .stdout(predicate::str::contains("Controle da Hipertensão (Baixo Sódio)"))
        .stdout(predicate::str::contains("(alimentos que gosta): bacon."))
        .stdout(predicate::str::contains("Considerações Especiais de Saúde"));
}

#[test]
fn test_cli_prompt_out_of_range_warns() {
    let dir = create_cli_test_environment();

    nutriplanner_cmd(&dir)
        .args(["prompt", "--days", "31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning:"))
        .stdout(predicate::str::contains("days"));
}

#[test]
fn test_cli_generate_without_key_fails() {
    let dir = create_cli_test_environment();

    nutriplanner_cmd(&dir)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOOGLE_API_KEY"));
}

#[test]
fn test_cli_generate_reads_key_from_dotenv() {
    let dir = create_cli_test_environment();
    let mut server = Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "dotenv-key")
        .with_status(200)
        .with_body(reply_body("**Dia 1:** tapioca"))
        .create();
    std::fs::write(dir.path().join(".env"), "GOOGLE_API_KEY=dotenv-key\n")
        .expect("Failed to write .env");

    nutriplanner_cmd(&dir)
        .args(["--endpoint", &server.url(), "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Dia 1:** tapioca"));
    mock.assert();
}

#[test]
fn test_cli_generate_invalid_form_warns_without_request() {
    let dir = create_cli_test_environment();
    let mut server = Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    nutriplanner_cmd(&dir)
        .args(["--api-key", "test-key", "--endpoint", &server.url()])
        .args(["generate", "--mode", "weeks", "--weeks", "13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning:"))
        .stdout(predicate::str::contains("weeks"));
    mock.assert();
}

#[test]
fn test_cli_generate_renders_menu() {
    let dir = create_cli_test_environment();
    let mut server = Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Regex("para 5 dias".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("**Dia 1:** omelete\n\n**Lista de Compras Sugerida:** ovos"))
        .create();

    nutriplanner_cmd(&dir)
        .args(["--api-key", "test-key", "--endpoint", &server.url()])
        .args(["generate", "--days", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lembre-se: O NutriPlanner AI"))
        .stdout(predicate::str::contains("Seu Cardápio Personalizado by NutriPlanner AI"))
        .stdout(predicate::str::contains("**Dia 1:** omelete"))
        .stdout(predicate::str::contains("Lista de Compras Sugerida"))
        .stdout(predicate::str::contains("Atenção").not());
    mock.assert();
}

#[test]
fn test_cli_generate_renders_alert_block() {
    let dir = create_cli_test_environment();
    let mut server = Server::new();
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(reply_body(
            "**Dia 1:** salada\n\nALERTA: doces não foram incluídos por causa da diabetes.",
        ))
        .create();

    nutriplanner_cmd(&dir)
        .args(["--api-key", "test-key", "--endpoint", &server.url()])
        .args(["generate", "--goal", "diabetes", "--likes", "doces"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Dia 1:** salada"))
        .stdout(predicate::str::contains("Atenção"))
        .stdout(predicate::str::contains(
            "! ALERTA: doces não foram incluídos por causa da diabetes.",
        ));
}

#[test]
fn test_cli_generate_service_failure_is_reported() {
    let dir = create_cli_test_environment();
    let mut server = Server::new();
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(500)
        .with_body(r#"{"error":{"code":500,"message":"Internal error","status":"INTERNAL"}}"#)
        .create();

    nutriplanner_cmd(&dir)
        .args(["--api-key", "test-key", "--endpoint", &server.url()])
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("Internal error"))
        .stdout(predicate::str::contains("tente novamente mais tarde"))
        .stdout(predicate::str::contains("test-key").not());
}

#[test]
fn test_cli_interactive_session_shows_history() {
    let dir = create_cli_test_environment();
    let mut server = Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(reply_body("**Dia 1:** cuscuz"))
        .expect(2)
        .create();

    // Two submissions with defaults, then stop.
    let answers = "\n\n\n\n\n\n\ns\n2\n\n\n\npão\n\n\nn\n";

    nutriplanner_cmd(&dir)
        .args(["--api-key", "test-key", "--endpoint", &server.url()])
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Histórico de Cardápios Gerados"))
        .stdout(predicate::str::contains(
            "### Cardápio 2 (Objetivo: Alimentação Saudável Geral para 1 semana(s))",
        ))
        .stdout(predicate::str::contains(
            "### Cardápio 1 (Objetivo: Alimentação Saudável Geral para 3 dias)",
        ))
        .stdout(predicate::str::contains("\"preferencias\": \"pão\""))
        .stdout(predicate::str::contains("Até a próxima!"));
    mock.assert();
}

#[test]
fn test_cli_interactive_end_of_input_exits_cleanly() {
    let dir = create_cli_test_environment();

    nutriplanner_cmd(&dir)
        .args(["--api-key", "test-key", "--endpoint", "http://127.0.0.1:9"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("NutriPlanner AI"));
}
