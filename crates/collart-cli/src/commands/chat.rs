use super::context::AppContext;
use anyhow::Result;
use collart_application::{ChatsViewModel, ConversationViewModel};
use collart_infrastructure::load_upload_file;
use std::path::PathBuf;

pub async fn chats(ctx: &AppContext) -> Result<()> {
    ctx.require_user().await?;
    let vm = ChatsViewModel::new(ctx.client.clone());
    vm.refresh().await?;

    for chat in vm.snapshot().chats {
        let unread = if chat.unread_count > 0 {
            format!(" [{} new]", chat.unread_count)
        } else {
            String::new()
        };
        println!(
            "{}  {}{unread}",
            chat.counterpart.id,
            chat.counterpart.display_name()
        );
        println!("    {}", chat.last_message);
    }
    println!("{} unread", vm.total_unread());
    Ok(())
}

pub async fn messages(ctx: &AppContext, user_id: &str) -> Result<()> {
    let me = ctx.require_user().await?;
    let vm = ConversationViewModel::new(ctx.client.clone(), user_id);
    vm.load().await?;

    for message in vm.snapshot().messages {
        let who = if message.is_from(&me.id) { "me" } else { user_id };
        println!(
            "[{}] {who}: {}",
            message.created_at.format("%Y-%m-%d %H:%M"),
            message.text
        );
        for file in &message.files {
            println!("    attachment: {file}");
        }
    }
    vm.mark_read().await?;
    Ok(())
}

pub async fn send(ctx: &AppContext, user_id: &str, text: &str, files: &[PathBuf]) -> Result<()> {
    ctx.require_user().await?;
    let mut uploads = Vec::with_capacity(files.len());
    for path in files {
        uploads.push(load_upload_file(path).await?);
    }

    let vm = ConversationViewModel::new(ctx.client.clone(), user_id);
    let sent = vm.send(text, uploads).await?;
    println!("Sent {}", sent.id);
    Ok(())
}
