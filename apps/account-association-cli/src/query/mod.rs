use account_association::{AccountIdentity, CallerIdentity, TenantId};
use clap::{Args, Subcommand};

use crate::common::{CommonArgs, IdentityArgs, print_json};

#[derive(Args)]
pub struct QueryArgs {
    #[command(subcommand)]
    command: QueryCommand,
    #[command(flatten)]
    common_args: CommonArgs,
}

#[derive(Subcommand)]
enum QueryCommand {
    /// Print the association key of an account
    Key(IdentityArgs),
    /// List the other accounts linked to an account
    Linked(IdentityArgs),
    /// Check whether two accounts are linked
    Check(CheckArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// First account as `tenant_id:domain:username`
    #[arg(long, value_parser = parse_identity, allow_hyphen_values = true)]
    first: AccountIdentity,
    /// Second account as `tenant_id:domain:username`
    #[arg(long, value_parser = parse_identity, allow_hyphen_values = true, conflicts_with = "caller")]
    second: Option<AccountIdentity>,
    /// Authenticated caller as `tenant_id:[DOMAIN/]username`
    #[arg(long, value_parser = parse_caller, allow_hyphen_values = true)]
    caller: Option<CallerIdentity>,
}

fn parse_tenant(raw: &str) -> Result<TenantId, String> {
    raw.parse()
        .map_err(|e| format!("invalid tenant id '{raw}': {e}"))
}

fn parse_identity(raw: &str) -> Result<AccountIdentity, String> {
    let mut parts = raw.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(tenant), Some(domain), Some(username)) if !username.is_empty() => {
            Ok(AccountIdentity::new(parse_tenant(tenant)?, domain, username))
        }
        _ => Err(format!("expected tenant_id:domain:username, got '{raw}'")),
    }
}

fn parse_caller(raw: &str) -> Result<CallerIdentity, String> {
    match raw.split_once(':') {
        Some((tenant, username)) if !username.is_empty() => {
            Ok(CallerIdentity::new(parse_tenant(tenant)?, username))
        }
        _ => Err(format!("expected tenant_id:username, got '{raw}'")),
    }
}

impl QueryArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        let client = self.common_args.client().await?;

        match &self.command {
            QueryCommand::Key(args) => {
                let key = client.get_association_key_of_user(&args.identity()).await?;
                print_json(&key)
            }
            QueryCommand::Linked(args) => {
                let linked = client.get_associations_of_user(&args.identity()).await?;
                print_json(&linked)
            }
            QueryCommand::Check(args) => {
                let linked = match (&args.second, &args.caller) {
                    (Some(second), _) => {
                        client.is_valid_user_association(&args.first, second).await?
                    }
                    (None, Some(caller)) => {
                        client
                            .is_valid_user_association_for_caller(caller, &args.first)
                            .await?
                    }
                    (None, None) => anyhow::bail!("either --second or --caller is required"),
                };
                print_json(&linked)
            }
        }
    }
}
