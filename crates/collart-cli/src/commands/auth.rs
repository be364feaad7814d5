use super::context::AppContext;
use anyhow::Result;

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let user = ctx.auth().attempt_login(email, password).await?;
    println!("Signed in as {} ({})", user.display_name(), user.email);
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.auth().logout().await?;
    println!("Signed out");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    let user = ctx.require_user().await?;
    let language = ctx.session.language().await;
    println!("{} <{}>", user.display_name(), user.email);
    println!("  id:          {}", user.id);
    if !user.profession.is_empty() {
        println!("  profession:  {}", user.profession);
    }
    if !user.sub_professions.is_empty() {
        println!("  also:        {}", user.sub_professions.join(", "));
    }
    println!("  experience:  {}", user.experience.text(language));
    if !user.tools.is_empty() {
        println!("  tools:       {}", user.tools.join(", "));
    }
    Ok(())
}
