//! Slash commands of the REPL.

/// Every command, used for completion.
pub const COMMAND_NAMES: &[&str] = &[
    "/login",
    "/register",
    "/chat",
    "/products",
    "/add-product",
    "/edit-product",
    "/delete-product",
    "/profile",
    "/hair",
    "/logout",
    "/back",
    "/help",
    "/quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login,
    Register,
    Chat,
    Products,
    AddProduct,
    EditProduct(String),
    DeleteProduct(String),
    Profile,
    Hair,
    Logout,
    Back,
    Help,
    Quit,
    /// A command that needs an argument was given none.
    MissingArgument(&'static str),
    Unknown(String),
}

impl Command {
    /// Parses a line starting with `/`. Anything else is not a command.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };
        let with_id = |make: fn(String) -> Command, usage: &'static str| {
            if arg.is_empty() {
                Command::MissingArgument(usage)
            } else {
                make(arg.to_string())
            }
        };

        Some(match name {
            "/login" => Command::Login,
            "/register" => Command::Register,
            "/chat" => Command::Chat,
            "/products" => Command::Products,
            "/add-product" => Command::AddProduct,
            "/edit-product" => with_id(Command::EditProduct, "/edit-product <id>"),
            "/delete-product" => with_id(Command::DeleteProduct, "/delete-product <id>"),
            "/profile" => Command::Profile,
            "/hair" => Command::Hair,
            "/logout" => Command::Logout,
            "/back" => Command::Back,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

pub const SIGNED_OUT_HELP: &str = "\
/login            Sign in
/register         Create an account
/help             Show this help
/quit             Exit";

pub const SIGNED_IN_HELP: &str = "\
/chat                  Start a consultation (/back to leave)
/products              List products
/add-product           Add a product
/edit-product <id>     Edit a product
/delete-product <id>   Delete a product
/profile               Show your profile
/hair                  Edit your hair information
/logout                Sign out
/help                  Show this help
/quit                  Exit";
