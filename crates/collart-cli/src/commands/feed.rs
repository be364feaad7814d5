use super::context::AppContext;
use anyhow::Result;
use collart_application::HomeViewModel;
use collart_core::Experience;

/// Filters collected from the command line.
#[derive(Debug, Default)]
pub struct FeedFilter {
    pub specialties: Vec<String>,
    pub experiences: Vec<Experience>,
    pub tools: Vec<String>,
    pub query: String,
}

fn home(ctx: &AppContext) -> HomeViewModel {
    HomeViewModel::new(
        ctx.client.clone(),
        ctx.client.clone(),
        ctx.client.clone(),
        ctx.session.clone(),
    )
}

async fn loaded_home(ctx: &AppContext, filter: &FeedFilter) -> Result<HomeViewModel> {
    ctx.require_user().await?;
    let vm = home(ctx);
    vm.refresh().await?;
    if !filter.specialties.is_empty() {
        // Order roles are matched through the skill catalog
        vm.load_filter_options().await?;
    }
    for specialty in &filter.specialties {
        vm.toggle_specialty(specialty);
    }
    for experience in &filter.experiences {
        vm.toggle_experience(*experience);
    }
    for tool in &filter.tools {
        vm.toggle_tool(tool);
    }
    vm.apply_filters();
    vm.set_query(&filter.query);
    Ok(vm)
}

pub async fn orders(ctx: &AppContext, filter: &FeedFilter) -> Result<()> {
    let vm = loaded_home(ctx, filter).await?;
    let state = vm.snapshot();
    if state.visible_orders.is_empty() {
        println!("No orders match");
        return Ok(());
    }
    for order in &state.visible_orders {
        println!("{}  {}", order.id, order.title);
        println!("    {} · {} · {}", order.role, order.experience_text, order.author_name);
        if !order.tools.is_empty() {
            println!("    tools: {}", order.tools_text());
        }
    }
    println!("{} of {} orders", state.visible_orders.len(), state.orders.len());
    Ok(())
}

pub async fn specialists(ctx: &AppContext, filter: &FeedFilter) -> Result<()> {
    let vm = loaded_home(ctx, filter).await?;
    let state = vm.snapshot();
    for specialist in &state.visible_specialists {
        println!("{}  {}", specialist.id, specialist.display_name());
        println!(
            "    {} · {}",
            specialist.profession, specialist.experience_text
        );
        if !specialist.tools.is_empty() {
            println!("    tools: {}", specialist.tools_text());
        }
    }
    println!(
        "{} of {} specialists",
        state.visible_specialists.len(),
        state.specialists.len()
    );
    Ok(())
}

pub async fn skills(ctx: &AppContext) -> Result<()> {
    let vm = home(ctx);
    vm.load_filter_options().await?;
    let language = ctx.session.language().await;
    for skill in vm.snapshot().skills {
        println!("{}  {}", skill.id, skill.localized_name(language));
    }
    Ok(())
}

pub async fn like(ctx: &AppContext, order_id: &str) -> Result<()> {
    let vm = loaded_home(ctx, &FeedFilter::default()).await?;
    // Favorites are only known after loading the liked tab
    let profile = super::interactions::profile(ctx);
    profile.load_current().await?;

    if vm.toggle_favorite(order_id).await? {
        println!("Added {order_id} to favorites");
    } else {
        println!("Removed {order_id} from favorites");
    }
    Ok(())
}

pub async fn respond(ctx: &AppContext, order_id: &str) -> Result<()> {
    let vm = loaded_home(ctx, &FeedFilter::default()).await?;
    vm.respond_to_order(order_id).await?;
    println!("Response sent for {order_id}");
    Ok(())
}

pub async fn invite(ctx: &AppContext, order_id: &str, specialist_id: &str) -> Result<()> {
    ctx.require_user().await?;
    home(ctx).invite_specialist(order_id, specialist_id).await?;
    println!("Invited {specialist_id} to {order_id}");
    Ok(())
}
