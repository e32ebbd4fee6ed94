//! `nourish` — the NourishNow storefront and admin console client.
//!
//! Talks to the user, product, order, and payment services through one
//! gateway; keeps the session token and the cart under ~/.nourish/.

mod commands;
mod config;
mod context;
mod output;

use clap::{Parser, Subcommand};
use nourish_model::{OrderStatus, ProductInput, RegisterRequest, Role, UserUpdate};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use crate::context::AppContext;

/// NourishNow CLI client.
#[derive(Parser, Debug)]
#[command(name = "nourish", about = "NourishNow storefront CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.nourish/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Login with an existing account.
    Login {
        /// Username.
        #[arg(long)]
        user: Option<String>,
        /// Password (not recommended — use interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account (and log in).
    Register {
        /// Username.
        username: String,
        /// Email address.
        #[arg(long)]
        email: String,
        /// Phone number.
        #[arg(long)]
        phone: Option<String>,
        /// Full name.
        #[arg(long = "full-name")]
        full_name: Option<String>,
        /// Password (not recommended — use interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Logout — clear the saved token.
    Logout,

    /// Show the current session.
    Whoami,

    /// Browse the menu.
    Menu {
        /// Match against product name and description.
        #[arg(long)]
        search: Option<String>,
        /// Restrict to one category.
        #[arg(long)]
        category: Option<String>,
    },

    /// List menu categories.
    Categories,

    /// Manage the cart.
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Place an order from the cart.
    Checkout {
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List your orders, or show one in detail.
    Orders {
        /// Optional order ID.
        id: Option<String>,
    },

    /// Refill the cart from a past order.
    Reorder {
        /// Order ID.
        id: String,
    },

    /// Pay for an order.
    Pay {
        /// Order ID.
        order_id: String,
    },

    /// List your payments.
    Payments,

    /// Admin console.
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum CartAction {
    /// Show cart contents and totals.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        product_id: String,
        /// Quantity to add.
        #[arg(long, default_value = "1")]
        qty: u32,
    },
    /// Set a line's quantity.
    SetQty {
        /// Product ID.
        product_id: String,
        /// New quantity (minimum 1).
        qty: u32,
    },
    /// Remove a line.
    Remove {
        /// Product ID.
        product_id: String,
    },
    /// Empty the cart.
    Clear,
}

#[derive(Subcommand, Debug)]
enum AdminAction {
    /// Product catalog management.
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// User account management.
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Order management.
    Order {
        #[command(subcommand)]
        action: AdminOrderAction,
    },
    /// All payments.
    Payments,
    /// Cross-service summary.
    Dashboard,
}

#[derive(Subcommand, Debug)]
enum ProductAction {
    /// List all products.
    List,
    /// Create a product.
    Create {
        /// Product name.
        name: String,
        /// Price.
        #[arg(long)]
        price: Decimal,
        /// Category.
        #[arg(long)]
        category: String,
        /// Description.
        #[arg(long)]
        description: Option<String>,
        /// Image URL.
        #[arg(long = "image-url")]
        image_url: Option<String>,
        /// Stock quantity.
        #[arg(long)]
        stock: Option<i32>,
    },
    /// Update a product (unset flags keep current values).
    Update {
        /// Product ID.
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "image-url")]
        image_url: Option<String>,
        #[arg(long)]
        stock: Option<i32>,
    },
    /// Delete a product.
    Delete {
        /// Product ID.
        id: String,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum UserAction {
    /// List all users.
    List,
    /// Show one user.
    Get {
        /// User ID.
        id: i64,
    },
    /// Update a user (unset flags are left untouched).
    Update {
        /// User ID.
        id: i64,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "full-name")]
        full_name: Option<String>,
        /// USER or ADMIN.
        #[arg(long)]
        role: Option<String>,
    },
    /// Delete a user.
    Delete {
        /// User ID.
        id: i64,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum AdminOrderAction {
    /// List all orders.
    List,
    /// Set an order's status.
    SetStatus {
        /// Order ID.
        id: String,
        /// PENDING, CONFIRMED, DELIVERED, or CANCELLED.
        status: String,
    },
}

fn parse_status(s: &str) -> anyhow::Result<OrderStatus> {
    OrderStatus::parse(&s.to_uppercase()).ok_or_else(|| {
        anyhow::anyhow!("Unknown status \"{s}\". Use PENDING, CONFIRMED, DELIVERED, or CANCELLED.")
    })
}

fn parse_role(s: &str) -> anyhow::Result<Role> {
    Role::parse(&s.to_uppercase())
        .ok_or_else(|| anyhow::anyhow!("Unknown role \"{s}\". Use USER or ADMIN."))
}

fn prompt_line(label: &str) -> anyhow::Result<String> {
    eprint!("{label}");
    let mut s = String::new();
    std::io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

fn prompt_new_password() -> anyhow::Result<String> {
    let pw = rpassword::prompt_password("Password: ")?;
    let confirm = rpassword::prompt_password("Confirm password: ")?;
    if pw != confirm {
        anyhow::bail!("Passwords do not match.");
    }
    if pw.is_empty() {
        anyhow::bail!("Password cannot be empty.");
    }
    Ok(pw)
}

fn confirm_or_abort(yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    eprint!("Are you sure? [y/N]: ");
    let mut s = String::new();
    std::io::stdin().read_line(&mut s)?;
    if s.trim().eq_ignore_ascii_case("y") {
        Ok(true)
    } else {
        println!("Cancelled.");
        Ok(false)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);

    let mut ctx = AppContext::open(&config_path)?;

    match cli.command {
        Commands::Login { user, password } => {
            let username = match user {
                Some(u) => u,
                None => prompt_line("Username: ")?,
            };
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };
            commands::auth::login(&mut ctx, &username, &password).await?;
        }

        Commands::Register {
            username,
            email,
            phone,
            full_name,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt_new_password()?,
            };
            let req = RegisterRequest {
                username,
                password,
                email,
                phone,
                full_name,
                role: None,
            };
            commands::auth::register(&mut ctx, &req).await?;
        }

        Commands::Logout => {
            commands::auth::logout(&mut ctx)?;
        }

        Commands::Whoami => {
            commands::auth::whoami(&ctx)?;
        }

        Commands::Menu { search, category } => {
            commands::menu::show(&ctx, search.as_deref(), category.as_deref()).await?;
        }

        Commands::Categories => {
            commands::menu::categories(&ctx).await?;
        }

        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx)?,
            CartAction::Add { product_id, qty } => {
                commands::cart::add(&ctx, &product_id, qty).await?;
            }
            CartAction::SetQty { product_id, qty } => {
                commands::cart::set_quantity(&ctx, &product_id, qty)?;
            }
            CartAction::Remove { product_id } => {
                commands::cart::remove(&ctx, &product_id)?;
            }
            CartAction::Clear => commands::cart::clear(&ctx)?,
        },

        Commands::Checkout { yes } => {
            commands::order::checkout(&ctx, yes).await?;
        }

        Commands::Orders { id } => match id {
            Some(id) => commands::order::show(&ctx, &id).await?,
            None => commands::order::list(&ctx).await?,
        },

        Commands::Reorder { id } => {
            commands::order::reorder(&ctx, &id).await?;
        }

        Commands::Pay { order_id } => {
            commands::payment::pay(&ctx, &order_id).await?;
        }

        Commands::Payments => {
            commands::payment::list(&ctx).await?;
        }

        Commands::Admin { action } => match action {
            AdminAction::Product { action } => match action {
                ProductAction::List => commands::admin::product_list(&ctx).await?,
                ProductAction::Create {
                    name,
                    price,
                    category,
                    description,
                    image_url,
                    stock,
                } => {
                    let input = ProductInput {
                        name,
                        description,
                        price,
                        image_url,
                        category,
                        stock_quantity: stock,
                    };
                    commands::admin::product_create(&ctx, &input).await?;
                }
                ProductAction::Update {
                    id,
                    name,
                    price,
                    category,
                    description,
                    image_url,
                    stock,
                } => {
                    commands::admin::product_update(
                        &ctx, &id, name, description, price, image_url, category, stock,
                    )
                    .await?;
                }
                ProductAction::Delete { id, yes } => {
                    if confirm_or_abort(yes)? {
                        commands::admin::product_delete(&ctx, &id).await?;
                    }
                }
            },

            AdminAction::User { action } => match action {
                UserAction::List => commands::admin::user_list(&ctx).await?,
                UserAction::Get { id } => commands::admin::user_get(&ctx, id).await?,
                UserAction::Update {
                    id,
                    email,
                    phone,
                    full_name,
                    role,
                } => {
                    let role = role.as_deref().map(parse_role).transpose()?;
                    let update = UserUpdate {
                        email,
                        phone,
                        full_name,
                        role,
                    };
                    commands::admin::user_update(&ctx, id, &update).await?;
                }
                UserAction::Delete { id, yes } => {
                    if confirm_or_abort(yes)? {
                        commands::admin::user_delete(&ctx, id).await?;
                    }
                }
            },

            AdminAction::Order { action } => match action {
                AdminOrderAction::List => commands::admin::order_list(&ctx).await?,
                AdminOrderAction::SetStatus { id, status } => {
                    let status = parse_status(&status)?;
                    commands::admin::order_set_status(&ctx, &id, status).await?;
                }
            },

            AdminAction::Payments => commands::admin::payment_list(&ctx).await?,

            AdminAction::Dashboard => commands::admin::dashboard(&ctx).await?,
        },

        Commands::Version => {
            println!("nourish cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
