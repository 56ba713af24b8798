//! In-memory end-to-end scenarios for the task marketplace.
//!
//! These tests drive both contracts the way the runtime would: entry
//! points are invoked directly, scheduled batches are read back from the
//! in-memory scheduler, and chained callbacks are delivered manually as
//! separate invocations carrying a chosen outcome.

use std::sync::Arc;

use agora::container::services::{ContainerContract, TaskCreatedArgs, TaskInitArgs};
use agora::ledger::adapters::memory::{InMemoryScheduler, InMemoryStorage};
use agora::ledger::domain::{
    AccountId, Balance, CallContext, ContractCode, EXECUTION_FEE_RESERVE, MINIMUM_INIT_DEPOSIT,
    PromiseAction, PromiseOutcome, PublicKey,
};
use agora::task::domain::{TaskRecord, TaskStatus};
use agora::task::services::{TaskContract, TaskContractError};
use eyre::{bail, ensure, eyre};
use rstest::{fixture, rstest};
use tracing_subscriber::EnvFilter;

type TestContainer = ContainerContract<InMemoryStorage, InMemoryScheduler>;
type TestTask = TaskContract<InMemoryStorage, InMemoryScheduler>;

struct World {
    creator: AccountId,
    worker: AccountId,
    container: TestContainer,
    container_scheduler: Arc<InMemoryScheduler>,
}

/// The creation chain recorded for one `add_task` call, as the runtime
/// would observe it.
struct CreationAttempt {
    task_account: AccountId,
    init_args: TaskInitArgs,
    forwarded_deposit: Balance,
}

#[fixture]
fn world() -> World {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let scheduler = Arc::new(InMemoryScheduler::new());
    let container = ContainerContract::new(
        AccountId::new("task-center.market").expect("valid account"),
        ContractCode::new(vec![0xde, 0xad, 0xbe, 0xef]),
        Arc::new(InMemoryStorage::new()),
        Arc::clone(&scheduler),
    );
    World {
        creator: AccountId::new("creator.market").expect("valid account"),
        worker: AccountId::new("worker.market").expect("valid account"),
        container,
        container_scheduler: scheduler,
    }
}

fn creation_ctx(world: &World) -> CallContext {
    CallContext::new(world.creator.clone())
        .with_attached_deposit(MINIMUM_INIT_DEPOSIT)
        .with_sender_public_key(PublicKey::new("ed25519:creatorkey"))
}

/// Initializes the container and starts one creation attempt, returning
/// what the runtime recorded for it.
async fn start_creation(world: &World, task_id: &str) -> eyre::Result<CreationAttempt> {
    world.container.initialize(&creation_ctx(world)).await?;
    world
        .container
        .add_task(&creation_ctx(world), task_id, "Fix bug", "Crash on startup")
        .await?;

    let scheduled = world
        .container_scheduler
        .last_scheduled()?
        .ok_or_else(|| eyre!("add_task must schedule a batch"))?;

    let init = scheduled
        .batch
        .actions()
        .iter()
        .find_map(|action| match action {
            PromiseAction::FunctionCall(call) if call.method() == "initialize" => Some(call),
            _ => None,
        })
        .ok_or_else(|| eyre!("creation batch must initialize the new instance"))?;
    let init_args: TaskInitArgs = serde_json::from_value(init.args().clone())?;

    let callback = scheduled
        .batch
        .callback()
        .ok_or_else(|| eyre!("creation batch must chain a callback"))?;
    ensure!(callback.receiver() == world.container.account());
    ensure!(callback.call().method() == "on_task_created");
    let callback_args: TaskCreatedArgs = serde_json::from_value(callback.call().args().clone())?;
    ensure!(&callback_args.task_account == scheduled.batch.receiver());

    Ok(CreationAttempt {
        task_account: callback_args.task_account,
        init_args,
        forwarded_deposit: init.deposit(),
    })
}

/// Stands up the task instance the creation chain would have deployed
/// and runs its forwarded initialization call.
async fn deploy_task_instance(
    world: &World,
    attempt: &CreationAttempt,
) -> eyre::Result<(TestTask, Arc<InMemoryScheduler>)> {
    let scheduler = Arc::new(InMemoryScheduler::new());
    let task = TaskContract::new(
        attempt.task_account.clone(),
        Arc::new(InMemoryStorage::new()),
        Arc::clone(&scheduler),
    );
    task.initialize(
        &CallContext::new(world.creator.clone()).with_attached_deposit(attempt.forwarded_deposit),
        &attempt.init_args.name,
        &attempt.init_args.description,
    )
    .await?;
    Ok((task, scheduler))
}

/// Drives an initialized task to `WaitingForReview` and through the
/// owner's `complete` call, returning the record as it stands while the
/// transfer is in flight.
async fn drive_to_completion_request(world: &World, task: &TestTask) -> eyre::Result<TaskRecord> {
    let worker_ctx = CallContext::new(world.worker.clone());
    task.assign_to_self(&worker_ctx).await?;
    task.start_processing(&worker_ctx).await?;
    task.submit_for_review(&worker_ctx).await?;
    task.complete(&CallContext::new(world.creator.clone())).await?;
    Ok(task.get_task().await?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirmed_creation_appears_in_the_task_list(world: World) -> eyre::Result<()> {
    let attempt = start_creation(&world, "alpha").await?;
    ensure!(attempt.task_account.as_str() == "alpha.task-center.market");
    ensure!(world.container.get_task_list().await?.is_empty());

    world
        .container
        .on_task_created(&attempt.task_account, PromiseOutcome::Succeeded)
        .await?;

    let listed = world.container.get_task_list().await?;
    ensure!(listed == [attempt.task_account.clone()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_creation_never_reaches_the_task_list(world: World) -> eyre::Result<()> {
    let attempt = start_creation(&world, "alpha").await?;

    world
        .container
        .on_task_created(&attempt.task_account, PromiseOutcome::Failed)
        .await?;

    ensure!(world.container.get_task_list().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_gates_progress_on_the_assignee(world: World) -> eyre::Result<()> {
    let attempt = start_creation(&world, "alpha").await?;
    let (task, _scheduler) = deploy_task_instance(&world, &attempt).await?;

    task.assign_to_self(&CallContext::new(world.worker.clone()))
        .await?;

    // The owner is not the assignee; the authorization check rejects it.
    let result = task
        .start_processing(&CallContext::new(world.creator.clone()))
        .await;
    ensure!(matches!(result, Err(TaskContractError::Domain(_))));

    let record = task
        .start_processing(&CallContext::new(world.worker.clone()))
        .await?;
    ensure!(record.status() == TaskStatus::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_transfer_leaves_the_task_in_review(world: World) -> eyre::Result<()> {
    let attempt = start_creation(&world, "alpha").await?;
    let (task, task_scheduler) = deploy_task_instance(&world, &attempt).await?;

    let in_flight = drive_to_completion_request(&world, &task).await?;
    ensure!(in_flight.status() == TaskStatus::WaitingForReview);

    let scheduled = task_scheduler
        .last_scheduled()?
        .ok_or_else(|| eyre!("complete must schedule the transfer"))?;
    ensure!(scheduled.batch.receiver() == &world.worker);

    task.on_transfer_completed(PromiseOutcome::Failed).await?;
    ensure!(task.get_task().await?.status() == TaskStatus::WaitingForReview);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_marketplace_flow_releases_the_reward(world: World) -> eyre::Result<()> {
    let attempt = start_creation(&world, "alpha").await?;
    world
        .container
        .on_task_created(&attempt.task_account, PromiseOutcome::Succeeded)
        .await?;

    let (task, task_scheduler) = deploy_task_instance(&world, &attempt).await?;
    let record = task.get_task().await?;
    ensure!(record.owner() == &world.creator);
    ensure!(record.name() == "Fix bug");
    ensure!(record.escrow() == MINIMUM_INIT_DEPOSIT);

    drive_to_completion_request(&world, &task).await?;

    let scheduled = task_scheduler
        .last_scheduled()?
        .ok_or_else(|| eyre!("complete must schedule the transfer"))?;
    let expected_reward = MINIMUM_INIT_DEPOSIT.saturating_sub(EXECUTION_FEE_RESERVE);
    let [PromiseAction::Transfer(amount)] = scheduled.batch.actions() else {
        bail!("unexpected transfer batch: {:?}", scheduled.batch.actions());
    };
    ensure!(*amount == expected_reward);

    // The runtime may deliver a transitional pending outcome first.
    task.on_transfer_completed(PromiseOutcome::Pending).await?;
    ensure!(task.get_task().await?.status() == TaskStatus::WaitingForReview);

    let completed = task.on_transfer_completed(PromiseOutcome::Succeeded).await?;
    ensure!(completed.status() == TaskStatus::Completed);
    ensure!(task.get_task().await?.status() == TaskStatus::Completed);

    // The container's view is unchanged by the task's lifecycle.
    ensure!(world.container.get_task_list().await? == [attempt.task_account.clone()]);
    Ok(())
}
