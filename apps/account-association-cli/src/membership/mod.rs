use account_association::AssociationKey;
use clap::{Args, Subcommand};
use tracing::info;

use crate::common::{CommonArgs, IdentityArgs};

#[derive(Args)]
pub struct MembershipArgs {
    #[command(subcommand)]
    command: MembershipCommand,
    #[command(flatten)]
    common_args: CommonArgs,
}

#[derive(Subcommand)]
enum MembershipCommand {
    /// Add an account to the group of an association key
    Link(LinkArgs),
    /// Remove an account from its group
    Unlink(IdentityArgs),
    /// Move a whole group to a new association key
    Rekey(RekeyArgs),
}

#[derive(Args)]
struct LinkArgs {
    #[arg(short = 'k', long)]
    key: String,
    #[command(flatten)]
    identity: IdentityArgs,
}

#[derive(Args)]
struct RekeyArgs {
    #[arg(long)]
    old_key: String,
    #[arg(long)]
    new_key: String,
}

impl MembershipArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        let client = self.common_args.durable_client().await?;

        match &self.command {
            MembershipCommand::Link(args) => {
                let identity = args.identity.identity();
                client
                    .create_user_association(&AssociationKey::new(args.key.as_str()), &identity)
                    .await?;
                info!(%identity, key = %args.key, "account linked");
            }
            MembershipCommand::Unlink(args) => {
                let identity = args.identity();
                client.delete_user_association(&identity).await?;
                info!(%identity, "account unlinked");
            }
            MembershipCommand::Rekey(args) => {
                client
                    .update_user_association_key(
                        &AssociationKey::new(args.old_key.as_str()),
                        &AssociationKey::new(args.new_key.as_str()),
                    )
                    .await?;
                info!(old_key = %args.old_key, new_key = %args.new_key, "group re-keyed");
            }
        }
        Ok(())
    }
}
