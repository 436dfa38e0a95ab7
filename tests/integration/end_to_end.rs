// tests/integration/end_to_end.rs
use std::path::{Path, PathBuf};

use latest_migration::app;
use latest_migration::cli::Args;
use latest_migration_shared_kernel::{ApplicationError, DomainError, InfrastructureError, LatestMigrationError};
use latest_migration_usecase::MigrationOutcome;

#[path = "../common/mod.rs"]
mod common;
use common::{Project, ScriptedExecutor};

const PRISMA: &str = "prisma/migrations";

fn run(project_dir: &Path, args: &Args, executor: &mut ScriptedExecutor) -> latest_migration_shared_kernel::Result<MigrationOutcome> {
    app::run(args, project_dir, executor)
}

fn copied_path(outcome: MigrationOutcome) -> PathBuf {
    match outcome {
        MigrationOutcome::Copied { migration, .. } => migration.sql_path,
        other => panic!("expected copy outcome, got {other:?}"),
    }
}

#[test]
fn finds_init_migration_next_to_lock_file() {
    let project = Project::new()
        .migration(PRISMA, "20250314170214_init")
        .lock_file(PRISMA);
    let mut executor = ScriptedExecutor::default();

    let outcome = run(project.path(), &Args::default(), &mut executor).unwrap();

    assert_eq!(
        copied_path(outcome),
        project.join("prisma/migrations/20250314170214_init/migration.sql")
    );
    assert!(executor.prompts.is_empty());
}

#[test]
fn malformed_folder_names_are_not_an_error() {
    let project = Project::new().migration(PRISMA, "2025_bad");
    let mut executor = ScriptedExecutor::default();

    let outcome = run(project.path(), &Args::default(), &mut executor).unwrap();

    assert!(matches!(outcome, MigrationOutcome::NoMigrations { .. }));
}

#[test]
fn newest_of_two_is_selected() {
    let project = Project::new()
        .migration(PRISMA, "20250101000000_a")
        .migration(PRISMA, "20250314170214_b");
    let mut executor = ScriptedExecutor::default();

    let outcome = run(project.path(), &Args::default(), &mut executor).unwrap();

    assert!(copied_path(outcome).ends_with("20250314170214_b/migration.sql"));
}

#[test]
fn winner_without_sql_file_is_fatal() {
    let project = Project::new()
        .migration(PRISMA, "20250101000000_a")
        .empty_migration(PRISMA, "20250314170214_b");
    let mut executor = ScriptedExecutor::default();

    let err = run(project.path(), &Args::default(), &mut executor).unwrap_err();

    let LatestMigrationError::Application(ApplicationError::MissingSqlFile { path }) = err.root() else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(path, &project.join("prisma/migrations/20250314170214_b/migration.sql"));
}

#[test]
fn no_directory_anywhere_is_fatal() {
    let project = Project::new();
    let mut executor = ScriptedExecutor::default();

    let err = run(project.path(), &Args::default(), &mut executor).unwrap_err();

    assert!(matches!(
        err.root(),
        LatestMigrationError::Application(ApplicationError::PathResolutionExhausted { .. })
    ));
}

#[test]
fn configured_directory_from_json_file() {
    let project = Project::new()
        .migration("db/migrations", "20250314170214_init")
        .file("default-config.json", r#"{ "migrationsDir": "db/migrations" }"#);
    let mut executor = ScriptedExecutor::default();

    let outcome = run(project.path(), &Args::default(), &mut executor).unwrap();

    assert_eq!(copied_path(outcome), project.join("db/migrations/20250314170214_init/migration.sql"));
}

#[test]
fn explicit_directory_beats_configured_one() {
    let project = Project::new()
        .migration(PRISMA, "20250314170214_prisma")
        .migration("other", "20240101000000_other");
    let args = Args { migrations_dir: Some(project.join("other")), ..Args::default() };
    let mut executor = ScriptedExecutor::default();

    let outcome = run(project.path(), &args, &mut executor).unwrap();

    assert!(copied_path(outcome).ends_with("20240101000000_other/migration.sql"));
}

#[test]
fn relative_explicit_directory_is_resolved_against_cwd() {
    let project = Project::new()
        .migration(PRISMA, "20250314170214_prisma")
        .migration("other", "20240101000000_other");
    let args = Args { migrations_dir: Some(PathBuf::from("other")), ..Args::default() };
    let mut executor = ScriptedExecutor::default();

    let outcome = run(project.path(), &args, &mut executor).unwrap();

    assert_eq!(copied_path(outcome), project.join("other/20240101000000_other/migration.sql"));
}

#[test]
fn missing_explicit_directory_falls_back() {
    let project = Project::new().migration(PRISMA, "20250314170214_init");
    let args = Args { migrations_dir: Some(project.join("nowhere")), ..Args::default() };
    let mut executor = ScriptedExecutor::default();

    let outcome = run(project.path(), &args, &mut executor).unwrap();

    assert!(copied_path(outcome).starts_with(project.join(PRISMA)));
}

#[test]
fn parent_project_layout() {
    let project = Project::new()
        .migration(PRISMA, "20250314170214_init")
        .file("bin/migration-util/package.json", "{}");
    let nested = project.join("bin/migration-util");
    let mut executor = ScriptedExecutor::default();

    let outcome = run(&nested, &Args::default(), &mut executor).unwrap();

    assert_eq!(copied_path(outcome), project.join("prisma/migrations/20250314170214_init/migration.sql"));
}

#[test]
fn fixture_directory_is_the_last_resort() {
    let project = Project::new().migration("test/fixtures/migrations", "20250314170214_init");
    let mut executor = ScriptedExecutor::default();

    let outcome = run(project.path(), &Args::default(), &mut executor).unwrap();

    assert!(copied_path(outcome).starts_with(project.join("test/fixtures/migrations")));
}

#[test]
fn bundled_fixture_tree_is_usable() {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("test/fixtures/migrations");
    let project = Project::new();
    let args = Args { migrations_dir: Some(fixtures.clone()), ..Args::default() };
    let mut executor = ScriptedExecutor::default();

    let outcome = run(project.path(), &args, &mut executor).unwrap();

    assert_eq!(copied_path(outcome), fixtures.join("20250314170214_init/migration.sql"));
}

#[test]
fn db_name_triggers_prompt_and_execute() {
    let project = Project::new().migration(PRISMA, "20250314170214_init");
    let args = Args { db_name: Some("shop".into()), ..Args::default() };
    let mut executor = ScriptedExecutor::answering("e");

    let outcome = run(project.path(), &args, &mut executor).unwrap();

    assert_eq!(executor.prompts.len(), 1);
    assert_eq!(executor.commands.len(), 1);
    assert_eq!(executor.commands[0].program, "turso");
    let MigrationOutcome::Executed { output, command, .. } = outcome else {
        panic!("expected execution");
    };
    assert_eq!(output, "applied");
    assert!(command.ends_with("| turso db shell shop"));
}

#[test]
fn auto_flag_skips_prompt() {
    let project = Project::new()
        .migration(PRISMA, "20250314170214_init")
        .file(".env", "dbName=from-env\n");
    let args = Args { auto_confirm: true, ..Args::default() };
    let mut executor = ScriptedExecutor::default();

    run(project.path(), &args, &mut executor).unwrap();

    assert!(executor.prompts.is_empty());
    assert_eq!(executor.commands[0].args, vec!["db", "shell", "from-env"]);
}

#[test]
fn invalid_configuration_is_reported() {
    let project = Project::new()
        .migration(PRISMA, "20250314170214_init")
        .file(".env", "autoConfirm=perhaps\n");
    let mut executor = ScriptedExecutor::default();

    let err = run(project.path(), &Args::default(), &mut executor).unwrap_err();

    assert!(err.to_string().starts_with("loading configuration"));
    assert!(matches!(
        err.root(),
        LatestMigrationError::Domain(DomainError::InvalidConfiguration { .. })
    ));
}

#[cfg(unix)]
#[test]
fn unreadable_directory_is_a_read_error() {
    use std::os::unix::fs::PermissionsExt;

    let project = Project::new().migration(PRISMA, "20250314170214_init");
    let dir = project.join(PRISMA);
    std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users can list the directory anyway.
    let still_readable = std::fs::read_dir(&dir).is_ok();
    let mut executor = ScriptedExecutor::default();

    let result = run(project.path(), &Args::default(), &mut executor);
    std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o755)).unwrap();

    if !still_readable {
        let err = result.unwrap_err();
        assert!(matches!(
            err.root(),
            LatestMigrationError::Infrastructure(InfrastructureError::DirectoryRead { .. })
        ));
    }
}
