//! Local-parts commonly used for role accounts, spamtraps, and
//! default installer logins rather than a real individual mailbox.
//! Matching is exact (case-insensitive) against the part before `@`.
pub const DEFAULT_USERNAMES: &[&str] = &[
    "admin",
    "administrator",
    "abuse",
    "billing",
    "contact",
    "default",
    "demo",
    "do-not-reply",
    "donotreply",
    "example",
    "feedback",
    "ftp",
    "guest",
    "help",
    "helpdesk",
    "hostmaster",
    "info",
    "information",
    "inquiries",
    "list",
    "listserv",
    "mail",
    "mailer-daemon",
    "marketing",
    "news",
    "newsletter",
    "no-reply",
    "noreply",
    "notifications",
    "office",
    "postmaster",
    "privacy",
    "root",
    "sales",
    "security",
    "service",
    "spam",
    "subscribe",
    "support",
    "sysadmin",
    "team",
    "test",
    "testing",
    "undisclosed-recipients",
    "unsubscribe",
    "user",
    "webmaster",
];
