// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Manage the access control list of a Cloud Storage object.
//!
//! ```text
//! object-acl <bucket> <object> [--entity=E] [--create [--role=R] | --delete]
//! ```

use anyhow::Result;
use clap::Parser;
use google_cloud_auth::credentials::Builder as CredentialsBuilder;
use google_cloud_storage::client::StorageControl;
use storage_object_acl::acl::ObjectAcl;
use storage_object_acl::args::Args;
use storage_object_acl::command;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = enable_tracing(&args);
    tracing::info!("Configuration: {args:?}");
    let action = args.action()?;

    let credentials = CredentialsBuilder::default().build()?;
    let mut builder = StorageControl::builder().with_credentials(credentials);
    if let Some(endpoint) = &args.endpoint {
        builder = builder.with_endpoint(endpoint);
    }
    let client = builder.build().await?;

    let acl = ObjectAcl::new(&client, args.object_ref());
    let mut stdout = std::io::stdout().lock();
    command::run(&acl, action, &mut stdout).await?;
    Ok(())
}

fn enable_tracing(args: &Args) -> tracing::dispatcher::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level())
        .finish();

    tracing::subscriber::set_default(subscriber)
}
