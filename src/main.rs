use std::{env, path::PathBuf, sync::Arc};

use anyhow::Result;
use dotenv::dotenv;
use serenity::all::{CreateAttachment, CreateMessage, GatewayIntents, Message};
use serenity::{async_trait, model::gateway::Ready, prelude::*, Client};
use tokio::sync::Mutex;
use tracing::{error, info};

use newsreport_bot::service::command::digest::{self, DigestReply};
use newsreport_bot::service::command::{self, Command};
use newsreport_bot::service::news::NewsService;
use newsreport_bot::service::render::RenderService;

struct Handler {
    news: Arc<NewsService>,
    render: Arc<RenderService>,
    // One command at a time; image rendering shares a single browser.
    gate: Mutex<()>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let content = msg.content.trim();

        // A bare mention of the bot gets the command overview.
        let bot_id = ctx.cache.current_user().id;
        let prefixes = [format!("<@{}>", bot_id), format!("<@!{}>", bot_id)];
        if prefixes
            .iter()
            .any(|p| content.strip_prefix(p.as_str()).is_some_and(|rest| rest.trim().is_empty()))
        {
            let _ = msg.reply(&ctx.http, command::help_text()).await;
            return;
        }

        let Some(cmd) = Command::parse(content) else {
            return;
        };

        let _serial = self.gate.lock().await;
        info!("received news command: {content}");

        match digest::handle(cmd, &self.news, &self.render).await {
            Ok(DigestReply::Text(text)) => {
                if let Err(err) = msg.channel_id.say(&ctx.http, text).await {
                    error!("failed to send text digest: {err}");
                }
            }
            Ok(DigestReply::Image(bytes)) => {
                let attachment = CreateAttachment::bytes(bytes, "news-digest.png");
                if let Err(err) = msg
                    .channel_id
                    .send_files(&ctx.http, vec![attachment], CreateMessage::new())
                    .await
                {
                    error!("failed to send digest image: {err}");
                }
            }
            Err(user_message) => {
                let _ = msg.channel_id.say(&ctx.http, user_message).await;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let token = env::var("DISCORD_TOKEN")?;
    let config_path = PathBuf::from(
        env::var("NEWS_CONFIG_PATH").unwrap_or_else(|_| "config.json".to_string()),
    );
    let template_path = PathBuf::from(
        env::var("NEWS_TEMPLATE_PATH")
            .unwrap_or_else(|_| "templates/news_template.html".to_string()),
    );

    info!("Initializing NewsService...");
    let news = Arc::new(NewsService::new(config_path)?);
    let render = Arc::new(RenderService::new(template_path));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    info!("Starting Discord client...");
    let mut client = Client::builder(token, intents)
        .event_handler(Handler {
            news,
            render: render.clone(),
            gate: Mutex::new(()),
        })
        .await?;

    tokio::select! {
        result = client.start() => {
            if let Err(why) = result {
                eprintln!("Client error: {why}");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    render.shutdown().await;

    Ok(())
}
