use crate::RelnotesWorld;
use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use relnotes::config::ReleaseNotesConfig;
use relnotes::github::issues::{Author, Issue, Label, Milestone, PullRequestMarker};

const ISSUE_URL_BASE: &str = "https://github.com/antlr/intellij-plugin-v4/issues";

fn issue_from_row(row: &[String]) -> Issue {
    let number: u64 = row[0].parse().expect("Issue number must be numeric");
    let labels = row[2]
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Label {
            name: name.to_string(),
        })
        .collect();
    let pull_request = match row[3].as_str() {
        "yes" => Some(PullRequestMarker { html_url: None }),
        "no" => None,
        other => panic!("pull_request must be yes or no, got {other}"),
    };
    let user = match row[4].as_str() {
        "-" => None,
        login => Some(Author {
            login: login.to_string(),
            name: None,
            html_url: format!("https://github.com/{login}"),
        }),
    };
    Issue {
        number,
        title: row[1].clone(),
        html_url: format!("{ISSUE_URL_BASE}/{number}"),
        labels,
        pull_request,
        user,
    }
}

fn rendered(world: &RelnotesWorld) -> String {
    match &world.release_notes {
        Some(Ok(notes)) => notes.render(),
        Some(Err(err)) => panic!("Release notes generation failed: {err:#}"),
        None => panic!("Release notes were not generated"),
    }
}

fn section_lines<'a>(text: &'a str, heading: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != heading)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

#[given(regex = r#"^the repository has the milestones "(.*)"$"#)]
async fn given_milestones(world: &mut RelnotesWorld, titles: String) {
    world.tracker.milestones = titles
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, title)| Milestone {
            number: i as u64 + 1,
            title: title.to_string(),
        })
        .collect();
}

#[given(regex = r#"^the milestone "(.*)" has the closed items:$"#)]
async fn given_closed_items(world: &mut RelnotesWorld, title: String, step: &Step) {
    let number = world
        .tracker
        .milestones
        .iter()
        .find(|m| m.title == title)
        .map(|m| m.number)
        .unwrap_or_else(|| panic!("Milestone {title} is not declared"));
    let table = step.table.as_ref().expect("Expected a table of items");
    let issues = table.rows.iter().skip(1).map(|row| issue_from_row(row)).collect();
    world.tracker.issues.insert(number, issues);
}

#[given(regex = r#"^the user "(.*)" is named "(.*)"$"#)]
async fn given_user_name(world: &mut RelnotesWorld, login: String, name: String) {
    world.tracker.names.insert(login, name);
}

#[when(regex = r#"^I generate release notes for milestone "(.*)"$"#)]
async fn when_generate(world: &mut RelnotesWorld, milestone: String) {
    let config = ReleaseNotesConfig::new("test-token", milestone);
    let result = relnotes::notes::generate_release_notes(&world.tracker, &config).await;
    world.release_notes = Some(result);
}

#[then("the release notes should be:")]
async fn then_release_notes_should_be(world: &mut RelnotesWorld, step: &Step) {
    let expected = step
        .docstring
        .as_ref()
        .expect("Expected docstring with the release notes");
    let output = rendered(world);

    let expected_lines: Vec<&str> = expected
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let actual_lines: Vec<&str> = output.lines().filter(|line| !line.is_empty()).collect();
    assert_eq!(
        actual_lines, expected_lines,
        "Unexpected release notes:\n---\n{}\n---",
        output
    );
    assert!(output.starts_with("\n## Issues fixed\n"));
}

#[then("every contributor line should have the contributor format")]
async fn then_contributor_format(world: &mut RelnotesWorld) {
    let output = rendered(world);
    let re = regex::Regex::new(
        r"^\* [ \d]{2}\d+ items: \[[^\]]+\]\(https://github\.com/[^)]+\)( \([^)]+\))?$",
    )
    .unwrap();
    let lines = section_lines(&output, "## Contributors");
    assert!(!lines.is_empty(), "No contributors in:\n{}", output);
    for line in lines {
        assert!(re.is_match(line), "Malformed contributor line: {line}");
    }
}

#[then(regex = r#"^the "(.*)" section should list (\d+) items$"#)]
async fn then_section_lists(world: &mut RelnotesWorld, heading: String, count: usize) {
    let output = rendered(world);
    let lines = section_lines(&output, &heading);
    assert_eq!(
        lines.len(),
        count,
        "Unexpected {heading} section in:\n---\n{}\n---",
        output
    );
}

#[then("rendering the release notes again should give the same text")]
async fn then_render_is_stable(world: &mut RelnotesWorld) {
    let first = rendered(world);
    let second = rendered(world);
    assert_eq!(first, second);
}

#[then(regex = r#"^generation should fail with "(.*)"$"#)]
async fn then_generation_fails(world: &mut RelnotesWorld, message: String) {
    match &world.release_notes {
        Some(Err(err)) => assert_eq!(err.root_cause().to_string(), message),
        other => panic!("Expected a failure, got {other:?}"),
    }
}

#[then(regex = r#"^the issues should have been requested (\d+) times?$"#)]
async fn then_issue_requests(world: &mut RelnotesWorld, count: u32) {
    assert_eq!(world.tracker.issue_requests(), count);
}

#[when(regex = r#"^I run `relnotes` with the arguments "(.*)"$"#)]
async fn when_run_with_arguments(world: &mut RelnotesWorld, arguments: String) {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_relnotes"))
        .args(arguments.split_whitespace())
        .output()
        .expect("Failed to execute relnotes");

    world.captured_output = [output.stdout, output.stderr].concat();
    world.command_status = Some(output.status);
}

#[when("I run `relnotes` without arguments")]
async fn when_run_without_arguments(world: &mut RelnotesWorld) {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_relnotes"))
        .output()
        .expect("Failed to execute relnotes");

    world.captured_output = [output.stdout, output.stderr].concat();
    world.command_status = Some(output.status);
}

#[then(regex = r#"^the command should fail with "(.*)"$"#)]
async fn then_command_fails(world: &mut RelnotesWorld, message: String) {
    let output = String::from_utf8(world.captured_output.clone()).expect("Invalid UTF-8");
    assert!(
        output.contains(&message),
        "Expected '{}' in output:\n---\n{}\n---",
        message,
        output
    );
    assert!(
        world.command_status.is_some_and(|s| !s.success()),
        "Command should have failed but succeeded with status: {:?}",
        world.command_status
    );
}

#[then(regex = r#"^the command should succeed with "(.*)"$"#)]
async fn then_command_succeeds(world: &mut RelnotesWorld, expected_output: String) {
    let output = String::from_utf8(world.captured_output.clone()).expect("Invalid UTF-8");
    assert_eq!(
        output.trim_end(),
        expected_output,
        "Expected output '{}', but got:\n---\n{}\n---",
        expected_output,
        output.trim_end()
    );
    assert!(
        world.command_status.is_some_and(|s| s.success()),
        "Command failed with status: {:?}",
        world.command_status
    );
}
