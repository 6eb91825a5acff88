// tests/scheduler_mock_fs.rs

mod common;
use crate::common::{at_secs, init_tracing, with_timeout, Harness};

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shaderwatch::compile::{CompileCommand, CompileOutcome};
use shaderwatch::types::ShaderStage;
use shaderwatch::watch::CompileReason;
use shaderwatch_test_utils::builders::ConfigBuilder;

type TestResult = Result<(), Box<dyn Error>>;

fn shaders() -> PathBuf {
    PathBuf::from("/shaders")
}

#[tokio::test]
async fn edited_vertex_shader_compiles_to_spv_on_next_cycle() -> TestResult {
    init_tracing();

    let cfg = ConfigBuilder::new()
        .stage(ShaderStage::Vertex, ".vert")
        .stage(ShaderStage::Fragment, ".frag")
        .output_extension(".spv")
        .compile_on_startup(false)
        .build();
    let mut h = Harness::new(&cfg);
    let basic = h.add_shader(&shaders(), "basic.vert", at_secs(0));

    let report = h.scheduler.tick().await?;
    assert!(report.first_cycle);
    assert_eq!(h.compiler.count(), 0);
    assert_eq!(
        h.scheduler.core().state().get(&basic).unwrap().last_modified,
        at_secs(0)
    );

    h.fs.touch(&basic, Duration::from_secs(2))?;
    let report = h.scheduler.tick().await?;

    assert_eq!(report.requests.len(), 1);
    let requests = h.compiler.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].file_name(), "basic.vert");
    assert_eq!(requests[0].reason, CompileReason::Modified);

    let command = CompileCommand::for_request(&cfg, &requests[0]);
    assert_eq!(command.output_file, PathBuf::from("/spirv/basic.vert.spv"));

    Ok(())
}

#[tokio::test]
async fn manual_recompile_compiles_every_tracked_file_once() -> TestResult {
    init_tracing();

    let cfg = ConfigBuilder::new().default_stages().build();
    let mut h = Harness::new(&cfg);
    h.add_shader(&shaders(), "a.vert", at_secs(0));
    h.add_shader(&shaders(), "b.frag", at_secs(0));

    h.scheduler.tick().await?;
    assert_eq!(h.compiler.count(), 0);

    h.context.request_recompile();
    let report = h.scheduler.tick().await?;

    assert!(report.forced);
    assert_eq!(h.compiler.compiled_names(), vec!["a.vert", "b.frag"]);
    assert!(!h.context.recompile_requested());

    h.scheduler.tick().await?;
    assert_eq!(h.compiler.count(), 2, "force flag must be consumed once");

    Ok(())
}

#[tokio::test]
async fn recompile_request_is_cleared_even_without_files() -> TestResult {
    let cfg = ConfigBuilder::new().default_stages().build();
    let mut h = Harness::new(&cfg);

    h.context.request_recompile();
    let report = h.scheduler.tick().await?;

    assert!(report.forced);
    assert!(report.requests.is_empty());
    assert!(!h.context.recompile_requested());
    Ok(())
}

#[tokio::test]
async fn failed_listing_abandons_cycle_and_keeps_pending_flags() -> TestResult {
    init_tracing();

    let cfg = ConfigBuilder::new()
        .default_stages()
        .compile_on_startup(false)
        .build();
    let mut h = Harness::new(&cfg);
    h.add_shader(&shaders(), "a.vert", at_secs(0));

    h.fs.set_read_dir_failure(shaders(), true);
    h.context.request_recompile();

    assert!(h.scheduler.tick().await.is_err());
    assert!(h.context.recompile_requested());
    assert!(h.scheduler.core().is_first_cycle());
    assert!(h.scheduler.core().state().is_empty());

    h.fs.set_read_dir_failure(shaders(), false);
    let report = h.scheduler.tick().await?;

    assert!(report.first_cycle);
    assert!(report.forced);
    assert_eq!(report.registered_only, 1);
    assert!(!h.context.recompile_requested());
    Ok(())
}

#[tokio::test]
async fn unrecognized_files_are_never_tracked() -> TestResult {
    let cfg = ConfigBuilder::new()
        .default_stages()
        .compile_on_startup(true)
        .build();
    let mut h = Harness::new(&cfg);
    let notes = h.add_shader(&shaders(), "notes.txt", at_secs(0));
    h.add_shader(&shaders(), "Makefile", at_secs(0));
    h.add_shader(&shaders(), "shader.vert.bak", at_secs(0));
    h.fs.add_dir("/shaders/looks_like.vert");
    h.add_shader(Path::new("/shaders/nested"), "deep.vert", at_secs(0));

    h.scheduler.tick().await?;
    h.fs.touch(&notes, Duration::from_secs(10))?;
    h.context.request_recompile();
    h.scheduler.tick().await?;

    assert_eq!(h.compiler.count(), 0);
    assert!(h.scheduler.core().state().is_empty());
    Ok(())
}

#[tokio::test]
async fn extension_shared_by_two_stages_compiles_once() -> TestResult {
    let cfg = ConfigBuilder::new()
        .stage(ShaderStage::Vertex, ".glsl")
        .stage(ShaderStage::Fragment, ".glsl")
        .compile_on_startup(true)
        .build();
    let mut h = Harness::new(&cfg);
    h.add_shader(&shaders(), "common.glsl", at_secs(0));

    h.scheduler.tick().await?;

    assert_eq!(h.compiler.compiled_names(), vec!["common.glsl"]);
    Ok(())
}

#[tokio::test]
async fn compile_failure_does_not_stop_cycle_or_retry() -> TestResult {
    init_tracing();

    let cfg = ConfigBuilder::new()
        .default_stages()
        .compile_on_startup(true)
        .build();
    let h = Harness::new(&cfg);
    h.add_shader(&shaders(), "a.vert", at_secs(0));
    h.add_shader(&shaders(), "b.vert", at_secs(0));
    h.compiler.fail_with("a.vert", CompileOutcome::Failed(Some(2)));

    let outcomes: Arc<Mutex<Vec<(String, CompileOutcome)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&outcomes);
    let mut scheduler = h.scheduler.with_result_hook(move |request, outcome| {
        sink.lock()
            .unwrap()
            .push((request.file_name(), outcome.clone()));
    });

    scheduler.tick().await?;
    assert_eq!(h.compiler.compiled_names(), vec!["a.vert", "b.vert"]);
    assert_eq!(
        outcomes.lock().unwrap().clone(),
        vec![
            ("a.vert".to_string(), CompileOutcome::Failed(Some(2))),
            ("b.vert".to_string(), CompileOutcome::Success),
        ]
    );

    // The failed file's timestamp was still recorded: no automatic retry.
    scheduler.tick().await?;
    assert_eq!(h.compiler.count(), 2);
    Ok(())
}

#[tokio::test]
async fn deleted_and_recreated_file_compiles_again() -> TestResult {
    let cfg = ConfigBuilder::new().default_stages().build();
    let mut h = Harness::new(&cfg);
    let a = h.add_shader(&shaders(), "a.vert", at_secs(0));

    h.scheduler.tick().await?;
    h.fs.remove(&a);
    let report = h.scheduler.tick().await?;
    assert_eq!(report.evicted, 1);

    h.fs.add_file(&a, at_secs(0));
    h.scheduler.tick().await?;

    assert_eq!(h.compiler.compiled_names(), vec!["a.vert"]);
    assert_eq!(h.compiler.requests()[0].reason, CompileReason::New);
    Ok(())
}

#[tokio::test]
async fn stop_before_run_performs_no_cycle() -> TestResult {
    let cfg = ConfigBuilder::new()
        .default_stages()
        .compile_on_startup(true)
        .build();
    let h = Harness::new(&cfg);
    h.add_shader(&shaders(), "a.vert", at_secs(0));

    h.context.request_stop();
    with_timeout(h.scheduler.run()).await?;

    assert_eq!(h.compiler.count(), 0);
    Ok(())
}

#[tokio::test]
async fn run_loop_picks_up_changes_until_stopped() -> TestResult {
    init_tracing();

    let cfg = ConfigBuilder::new()
        .default_stages()
        .compile_on_startup(true)
        .build();
    let h = Harness::new(&cfg);
    let a = h.add_shader(&shaders(), "a.vert", at_secs(0));

    let scheduler = h.scheduler.with_interval(Duration::from_millis(10));
    let handle = tokio::spawn(scheduler.run());

    let compiler = h.compiler.clone();
    with_timeout(async {
        while compiler.count() < 1 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;

    h.fs.touch(&a, Duration::from_secs(5))?;
    with_timeout(async {
        while compiler.count() < 2 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;

    h.context.request_stop();
    with_timeout(handle).await??;

    let reasons: Vec<CompileReason> = h.compiler.requests().iter().map(|r| r.reason).collect();
    assert_eq!(reasons, vec![CompileReason::New, CompileReason::Modified]);
    Ok(())
}
