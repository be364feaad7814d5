use super::context::AppContext;
use anyhow::Result;
use collart_application::{InteractionsViewModel, ProfileViewModel};
use collart_core::interaction::{Interaction, StatusGroup, TransitionOutcome};

pub(crate) fn profile(ctx: &AppContext) -> ProfileViewModel {
    ProfileViewModel::new(
        ctx.client.clone(),
        ctx.client.clone(),
        ctx.client.clone(),
        ctx.client.clone(),
        ctx.session.clone(),
    )
}

async fn loaded(ctx: &AppContext) -> Result<InteractionsViewModel> {
    ctx.require_user().await?;
    let vm = InteractionsViewModel::new(ctx.client.clone(), ctx.session.clone());
    vm.refresh().await?;
    Ok(vm)
}

fn print_section(title: &str, interactions: &[Interaction], show_sender: bool) {
    println!("{title} ({})", interactions.len());
    for interaction in interactions {
        let other = if show_sender {
            &interaction.sender
        } else {
            &interaction.getter
        };
        println!(
            "  {}  {} · {} · {}",
            interaction.id,
            interaction.order.title,
            other.display_name(),
            interaction.status
        );
    }
}

pub async fn list(ctx: &AppContext, completed: bool) -> Result<()> {
    let vm = loaded(ctx).await?;
    if completed {
        vm.set_group(StatusGroup::Completed);
    }
    print_section("Responses", &vm.visible_responses(), true);
    print_section("Invitations", &vm.visible_invitations(), true);
    print_section("Sent", &vm.visible_outgoing(), false);
    Ok(())
}

fn report(interaction_id: &str, outcome: TransitionOutcome, verb: &str) {
    match outcome {
        TransitionOutcome::Applied => println!("{verb} {interaction_id}"),
        TransitionOutcome::Ignored => println!("{interaction_id} was already answered"),
        TransitionOutcome::Unknown => println!("{interaction_id} is no longer listed"),
    }
}

pub async fn accept(ctx: &AppContext, interaction_id: &str) -> Result<()> {
    let vm = loaded(ctx).await?;
    let outcome = vm.accept(interaction_id).await?;
    report(interaction_id, outcome, "Accepted");
    Ok(())
}

pub async fn reject(ctx: &AppContext, interaction_id: &str) -> Result<()> {
    let vm = loaded(ctx).await?;
    let outcome = vm.reject(interaction_id).await?;
    report(interaction_id, outcome, "Rejected");
    Ok(())
}
