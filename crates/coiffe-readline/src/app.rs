//! Interactive shell over the application services.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use coiffe_application::{
    AuthSession, CatalogService, ConsultationService, ConversationEvent, HairProfileService,
};
use coiffe_core::catalog::{CatalogRepository, Product};
use coiffe_core::config::AppConfig;
use coiffe_core::error::CoiffeError;
use coiffe_core::user::{ProfileRepository, UserRecord};
use coiffe_core::validation::{
    HairInfoForm, LoginForm, PRODUCT_CATEGORIES, ProductForm, RegistrationForm,
};
use coiffe_infrastructure::SecretService;
use coiffe_interaction::GeminiApiAgent;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing::{info, warn};

use crate::cli_helper::CliHelper;
use crate::command::{Command, SIGNED_IN_HELP, SIGNED_OUT_HELP};

type LineEditor = Editor<CliHelper, DefaultHistory>;

/// Result of one prompt.
enum Input {
    Line(String),
    /// Ctrl-C on a form prompt abandons the form.
    Cancelled,
    Eof,
}

pub struct App {
    config: AppConfig,
    secrets: SecretService,
    profiles: Arc<dyn ProfileRepository>,
    catalog_store: Arc<dyn CatalogRepository>,
    auth: AuthSession,
    hair: HairProfileService,
    catalog: CatalogService,
    rl: LineEditor,
}

impl App {
    pub fn new(
        config: AppConfig,
        secrets: SecretService,
        profiles: Arc<dyn ProfileRepository>,
        catalog_store: Arc<dyn CatalogRepository>,
        auth: AuthSession,
    ) -> Result<Self> {
        let mut rl: LineEditor = Editor::new()?;
        rl.set_helper(Some(CliHelper::new()));

        Ok(Self {
            hair: HairProfileService::new(profiles.clone()),
            catalog: CatalogService::new(catalog_store.clone()),
            config,
            secrets,
            profiles,
            catalog_store,
            auth,
            rl,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("{}", "Coiffe hair consultation".bright_magenta().bold());
        println!("Type /help for commands.\n");

        match self.catalog.seed_if_empty().await {
            Ok(0) => {}
            Ok(count) => info!(count, "Seeded sample catalog"),
            Err(e) => warn!(error = %e, "Failed to seed catalog"),
        }

        loop {
            let signed_in = self.auth.current_user_id().await.is_some();
            let prompt = if signed_in { ">> " } else { "guest> " };

            let line = match self.read(prompt)? {
                Input::Line(line) => line,
                Input::Cancelled => {
                    println!("Use /quit to exit.");
                    continue;
                }
                Input::Eof => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let _ = self.rl.add_history_entry(line);

            let Some(command) = Command::parse(line) else {
                println!("Commands start with '/'. Try /help.");
                continue;
            };

            if matches!(command, Command::Quit) {
                break;
            }
            if signed_in {
                self.handle_signed_in(command).await?;
            } else {
                self.handle_signed_out(command).await?;
            }
        }

        println!("{}", "Goodbye!".bright_magenta());
        Ok(())
    }

    async fn handle_signed_out(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Login => self.login().await?,
            Command::Register => self.register().await?,
            Command::Help => println!("{SIGNED_OUT_HELP}"),
            Command::Unknown(name) => println!("{} {}", "Unknown command:".red(), name),
            _ => println!("Please /login or /register first."),
        }
        Ok(())
    }

    async fn handle_signed_in(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Chat => self.chat().await?,
            Command::Products => self.list_products().await,
            Command::AddProduct => self.add_product().await?,
            Command::EditProduct(id) => self.edit_product(&id).await?,
            Command::DeleteProduct(id) => self.delete_product(&id).await?,
            Command::Profile => self.show_profile().await,
            Command::Hair => self.edit_hair().await?,
            Command::Logout => {
                self.auth.logout().await;
                println!("{}", "Signed out.".green());
            }
            Command::Help => println!("{SIGNED_IN_HELP}"),
            Command::Login | Command::Register => println!("Already signed in. Use /logout first."),
            Command::Back => println!("Nothing to go back from."),
            Command::MissingArgument(usage) => println!("Usage: {usage}"),
            Command::Unknown(name) => println!("{} {}", "Unknown command:".red(), name),
            Command::Quit => {}
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Account
    // ------------------------------------------------------------------

    async fn login(&mut self) -> Result<()> {
        let Some(email) = self.ask("Email", "")? else {
            return Ok(());
        };
        let Some(password) = self.ask("Password", "")? else {
            return Ok(());
        };

        match self.auth.login(&LoginForm { email, password }).await {
            Ok(_) => match self.auth.current_user().await {
                Ok(Some(record)) => welcome("Welcome back", &record),
                _ => println!("{}", "Welcome back".green()),
            },
            Err(e) => report(&e),
        }
        Ok(())
    }

    async fn register(&mut self) -> Result<()> {
        let mut form = RegistrationForm::default();
        for (label, slot) in [
            ("Email", &mut form.email),
            ("Password", &mut form.password),
            ("Confirm password", &mut form.confirm_password),
            ("Full name", &mut form.full_name),
            ("Phone number", &mut form.phone_number),
        ] {
            match self.ask(label, "")? {
                Some(value) => *slot = value,
                None => return Ok(()),
            }
        }

        match self.auth.register(&form).await {
            Ok(record) => welcome("Account created. Welcome", &record),
            Err(e) => report(&e),
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    async fn show_profile(&self) {
        match self.auth.current_user().await {
            Ok(Some(record)) => {
                println!("{}", "Your profile".bright_blue().bold());
                for (label, value) in HairProfileService::profile_view(&record) {
                    println!("  {:<14} {}", format!("{label}:").bright_blue(), value);
                }
            }
            Ok(None) => println!("No profile found."),
            Err(e) => report(&e),
        }
    }

    async fn edit_hair(&mut self) -> Result<()> {
        let Some(user_id) = self.auth.current_user_id().await else {
            return Ok(());
        };
        let current = match self.hair.load(&user_id).await {
            Ok(form) => form,
            Err(e) => {
                report(&e);
                HairInfoForm::default()
            }
        };

        let mut form = current.clone();
        for (label, slot, initial) in [
            ("Hair style", &mut form.hair_style, &current.hair_style),
            ("Hair quality", &mut form.hair_quality, &current.hair_quality),
            ("Hair length", &mut form.hair_length, &current.hair_length),
            ("Hair color", &mut form.hair_color, &current.hair_color),
            ("Hair texture", &mut form.hair_texture, &current.hair_texture),
            ("Hair concerns (optional)", &mut form.hair_concerns, &current.hair_concerns),
        ] {
            match self.ask(label, initial)? {
                Some(value) => *slot = value,
                None => return Ok(()),
            }
        }

        match self.hair.save(&user_id, &form).await {
            Ok(_) => {
                self.auth.refresh().await;
                println!("{}", "Hair information saved.".green());
            }
            Err(e) => report(&e),
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    async fn list_products(&self) {
        match self.catalog.list().await {
            Ok(products) if products.is_empty() => println!("No products yet. Add one with /add-product."),
            Ok(products) => {
                for product in &products {
                    print_product(product);
                }
            }
            Err(e) => report(&e),
        }
    }

    async fn add_product(&mut self) -> Result<()> {
        let Some(form) = self.product_form(ProductForm::default())? else {
            return Ok(());
        };
        match self.catalog.create(&form).await {
            Ok(product) => println!("{} {}", "Added".green(), product.id.dimmed()),
            Err(e) => report(&e),
        }
        Ok(())
    }

    async fn edit_product(&mut self, id: &str) -> Result<()> {
        let existing = match self.catalog.get(id).await {
            Ok(product) => product,
            Err(e) => {
                report(&e);
                return Ok(());
            }
        };
        let Some(form) = self.product_form(ProductForm::from_product(&existing))? else {
            return Ok(());
        };
        match self.catalog.update(id, &form).await {
            Ok(_) => println!("{}", "Product updated.".green()),
            Err(e) => report(&e),
        }
        Ok(())
    }

    async fn delete_product(&mut self, id: &str) -> Result<()> {
        let product = match self.catalog.get(id).await {
            Ok(product) => product,
            Err(e) => {
                report(&e);
                return Ok(());
            }
        };
        let prompt = format!("Delete '{}'? [y/N]", product.name);
        let Some(answer) = self.ask(&prompt, "")? else {
            return Ok(());
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Kept.");
            return Ok(());
        }
        match self.catalog.delete(id).await {
            Ok(()) => println!("{}", "Product deleted.".green()),
            Err(e) => report(&e),
        }
        Ok(())
    }

    fn product_form(&mut self, initial: ProductForm) -> Result<Option<ProductForm>> {
        println!("Categories: {}", PRODUCT_CATEGORIES.join(", ").dimmed());
        let mut form = initial.clone();
        for (label, slot, value) in [
            ("Name", &mut form.name, &initial.name),
            ("Description", &mut form.description, &initial.description),
            ("Price", &mut form.price, &initial.price),
            ("Stock", &mut form.stock, &initial.stock),
            ("Category", &mut form.category, &initial.category),
            ("Brand", &mut form.brand, &initial.brand),
            ("Image URL", &mut form.image_url, &initial.image_url),
        ] {
            match self.ask(label, value)? {
                Some(answer) => *slot = answer,
                None => return Ok(None),
            }
        }

        let default = if initial.is_available { "y" } else { "n" };
        match self.ask("Available? [y/n]", default)? {
            Some(answer) => form.is_available = !answer.trim().eq_ignore_ascii_case("n"),
            None => return Ok(None),
        }
        Ok(Some(form))
    }

    // ------------------------------------------------------------------
    // Consultation
    // ------------------------------------------------------------------

    fn consultation_service(&self) -> coiffe_core::Result<ConsultationService> {
        let api_key = self.secrets.gemini_api_key()?;
        let mut agent = GeminiApiAgent::new(api_key).with_model(&self.config.gemini_model);
        if let Some(secs) = self.config.request_timeout_secs {
            agent = agent.with_timeout(Duration::from_secs(secs))?;
        }
        info!(model = agent.model(), "Using Gemini model");

        Ok(ConsultationService::new(
            self.profiles.clone(),
            self.catalog_store.clone(),
            Arc::new(agent),
        )
        .with_response_language(&self.config.response_language))
    }

    async fn chat(&mut self) -> Result<()> {
        let Some(user_id) = self.auth.current_user_id().await else {
            return Ok(());
        };
        let service = match self.consultation_service() {
            Ok(service) => service,
            Err(e) => {
                report(&e);
                return Ok(());
            }
        };

        let (session, mut events) = service.start(&user_id).await;
        println!("{}", "Consultation started. /back to leave.".dimmed());

        let printer = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    ConversationEvent::MessageAppended(message) if !message.is_from_user => {
                        println!("\n{} {}\n", "Assistant:".bright_magenta().bold(), message.text);
                    }
                    ConversationEvent::MessageAppended(_) => {}
                    ConversationEvent::Notification(notice) => {
                        println!("{}", notice.red());
                    }
                }
            }
        });

        loop {
            let line = match self.read("you> ")? {
                Input::Line(line) => line,
                Input::Cancelled | Input::Eof => break,
            };
            match Command::parse(&line) {
                Some(Command::Back) | Some(Command::Quit) => break,
                Some(Command::Help) => println!("Type a question, or /back to leave."),
                Some(_) => println!("Only /back is available during a consultation."),
                None => {
                    if session.send(&line).is_some() {
                        let _ = self.rl.add_history_entry(line.trim());
                        println!("{}", "thinking...".dimmed());
                    }
                }
            }
        }

        session.close();
        printer.abort();
        println!("{}", "Consultation closed.".dimmed());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    fn read(&mut self, prompt: &str) -> Result<Input> {
        match self.rl.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Cancelled),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err.into()),
        }
    }

    /// Prompts for one form field, prefilled with `initial`.
    /// `None` means the user abandoned the form.
    fn ask(&mut self, label: &str, initial: &str) -> Result<Option<String>> {
        let prompt = format!("{}: ", label.bright_blue());
        match self.rl.readline_with_initial(&prompt, (initial, "")) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Cancelled.".dimmed());
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn welcome(headline: &str, record: &UserRecord) {
    let name = record.full_name.as_deref().unwrap_or_default();
    println!("{} {}", headline.green(), name.green().bold());
    if let Some(hint) = hair_hint(record) {
        println!("{}", hint.dimmed());
    }
}

/// Nudge shown at sign-in while no hair attribute has been recorded.
fn hair_hint(record: &UserRecord) -> Option<&'static str> {
    if record.hair_profile().has_hair_details() {
        None
    } else {
        Some("Tell us about your hair with /hair for more personal advice.")
    }
}

fn print_product(product: &Product) {
    let availability = if product.is_available {
        product.availability_label().green()
    } else {
        product.availability_label().red()
    };
    println!(
        "{} {} {}",
        product.name.bold(),
        format!("({})", product.category).dimmed(),
        availability
    );
    if !product.brand.is_empty() {
        println!("  Brand: {}", product.brand);
    }
    println!("  {}", product.description);
    println!("  Price: {:.2}  Stock: {}", product.price, product.stock_amount);
    println!("  {}", format!("id: {}", product.id).dimmed());
}

fn report(error: &CoiffeError) {
    match error.validation_errors() {
        Some(errors) => {
            for e in errors.iter() {
                println!("{} {}", "✗".red(), e.message);
            }
        }
        None => println!("{} {}", "Error:".red(), error.user_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hair_hint_until_profile_has_details() {
        let mut record = UserRecord::new("u-1", "an@example.com", "An", "0901234567");
        assert!(hair_hint(&record).is_some());

        record.hair_texture = Some("coarse".into());
        assert_eq!(hair_hint(&record), None);
    }
}
