use account_association::TenantId;
use clap::{Args, Subcommand};
use tracing::info;

use crate::common::CommonArgs;

/// Cleanup after tenant or user-store lifecycle events.
#[derive(Args)]
pub struct CascadeArgs {
    #[command(subcommand)]
    command: CascadeCommand,
    #[command(flatten)]
    common_args: CommonArgs,
}

#[derive(Subcommand)]
enum CascadeCommand {
    /// Drop every association of a removed tenant
    DeleteTenant {
        #[arg(short = 't', long, allow_negative_numbers = true)]
        tenant_id: TenantId,
    },
    /// Follow a user-store domain rename
    RenameDomain {
        #[arg(short = 't', long, allow_negative_numbers = true)]
        tenant_id: TenantId,
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
    },
    /// Drop every association of a removed user-store domain
    DeleteDomain {
        #[arg(short = 't', long, allow_negative_numbers = true)]
        tenant_id: TenantId,
        #[arg(short = 'd', long)]
        domain: String,
    },
}

impl CascadeArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        let client = self.common_args.durable_client().await?;

        match &self.command {
            CascadeCommand::DeleteTenant { tenant_id } => {
                client
                    .delete_user_associations_from_tenant_id(*tenant_id)
                    .await?;
                info!(tenant_id, "tenant associations removed");
            }
            CascadeCommand::RenameDomain { tenant_id, old, new } => {
                client
                    .update_domain_name_of_associations(*tenant_id, old, new)
                    .await?;
                info!(tenant_id, old, new, "domain renamed");
            }
            CascadeCommand::DeleteDomain { tenant_id, domain } => {
                client
                    .delete_associations_from_domain(*tenant_id, domain)
                    .await?;
                info!(tenant_id, domain, "domain associations removed");
            }
        }
        Ok(())
    }
}
