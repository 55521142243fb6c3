use clap::{Args, Parser, Subcommand};

/// Meeting Join CLI
///
/// Exchanges a meeting title and attendee name with the join backend and
/// prints the session configuration a conferencing client would start with.
///
/// The join backend and region default to `CHIME_JOIN_BASE_URL` and
/// `CHIME_JOIN_REGION`, then to the compiled-in defaults.
#[derive(Parser, Debug)]
#[clap(name = "chime-join")]
pub struct Opt {
    #[clap(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Join a meeting and print the resulting session configuration as JSON.
    Join(Join),

    /// Print the join URL that would be used, without sending anything.
    Url(Endpoint),
}

#[derive(Args, Debug, Clone)]
pub struct Join {
    /// Meeting title. The backend creates the meeting on first join.
    #[clap(long = "meeting-id", short = 'm')]
    pub meeting_id: String,

    /// Display name for the joining attendee.
    #[clap(long = "attendee-name", short = 'n')]
    pub attendee_name: String,

    #[clap(flatten)]
    pub endpoint: Endpoint,

    /// Media region to request, e.g. us-east-1.
    #[clap(long = "region")]
    pub region: Option<String>,

    /// External id of the primary meeting when joining a replica meeting.
    #[clap(long = "primary-external-meeting-id", default_value = "")]
    pub primary_external_meeting_id: String,

    /// Print the decoded join response instead of the session configuration.
    #[clap(long = "raw")]
    pub raw: bool,
}

#[derive(Args, Debug, Clone)]
pub struct Endpoint {
    /// Join backend base URL. Overrides the configured base when non-empty.
    #[clap(long = "endpoint", short = 'e', default_value = "")]
    pub endpoint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_join_with_defaults() {
        let opt = Opt::try_parse_from(["chime-join", "join", "-m", "standup", "-n", "Alice"])
            .expect("should parse");
        let Mode::Join(join) = opt.mode else {
            panic!("expected join mode");
        };
        assert_eq!(join.meeting_id, "standup");
        assert_eq!(join.attendee_name, "Alice");
        assert_eq!(join.endpoint.endpoint, "");
        assert_eq!(join.region, None);
        assert_eq!(join.primary_external_meeting_id, "");
        assert!(!join.raw);
    }

    #[test]
    fn parses_join_overrides() {
        let opt = Opt::try_parse_from([
            "chime-join",
            "join",
            "--meeting-id",
            "replica",
            "--attendee-name",
            "Bob",
            "--endpoint",
            "https://host",
            "--region",
            "us-east-1",
            "--primary-external-meeting-id",
            "primary-42",
            "--raw",
        ])
        .expect("should parse");
        let Mode::Join(join) = opt.mode else {
            panic!("expected join mode");
        };
        assert_eq!(join.endpoint.endpoint, "https://host");
        assert_eq!(join.region.as_deref(), Some("us-east-1"));
        assert_eq!(join.primary_external_meeting_id, "primary-42");
        assert!(join.raw);
    }

    #[test]
    fn meeting_id_is_required() {
        assert!(Opt::try_parse_from(["chime-join", "join", "-n", "Alice"]).is_err());
    }

    #[test]
    fn parses_url_mode() {
        let opt = Opt::try_parse_from(["chime-join", "url", "-e", "https://host/"])
            .expect("should parse");
        let Mode::Url(endpoint) = opt.mode else {
            panic!("expected url mode");
        };
        assert_eq!(endpoint.endpoint, "https://host/");
    }
}
