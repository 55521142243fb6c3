/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use chime_join_client::{JoinConfig, JoinRequestService};

use crate::cli_args::Endpoint;

pub fn join_url(endpoint: &Endpoint, config: JoinConfig) -> anyhow::Result<String> {
    let url = JoinRequestService::new(config).join_url(&endpoint.endpoint)?;
    Ok(url.to_string())
}
