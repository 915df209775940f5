pub mod cmd {
    // Desk commands
    pub const SUBMIT: &str = "complaintdesk submit --title <TITLE> --description <TEXT>";
    pub const LIST: &str = "complaintdesk list";
    pub const LIST_PENDING: &str = "complaintdesk list --status pending";
    pub const SHOW: &str = "complaintdesk show <id>";
    pub const STATUS: &str = "complaintdesk status <id> <pending|review|resolved>";
    pub const RESPOND: &str = "complaintdesk respond <id> <text>";

    // Config commands
    pub const CONFIG_SET_ENDPOINT: &str = "complaintdesk config set-endpoint <URL>";
}
