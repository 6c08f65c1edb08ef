//! Classifies a `User-Agent` header into browser/OS/device facts and
//! derived reputation-relevant booleans: is it a known bot by name, a
//! mobile device, a scripting/HTTP-library client, or a browser old
//! enough to be considered abandoned (and thus suspicious traffic).

mod bot_names;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;

pub use bot_names::BOT_NAMES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    InternetExplorer,
    Firefox,
    Safari,
    Opera,
    AndroidBrowser,
    Other,
}

#[derive(Debug, Clone)]
pub struct UserAgentInfo {
    pub browser: BrowserKind,
    pub browser_major: Option<u32>,
    pub os_name: String,
    pub os_major: Option<u32>,
    pub device_category: String,
    pub is_mobile: bool,
    pub is_script: bool,
    pub is_bot: bool,
    pub is_old: bool,
}

static BOT_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(BOT_NAMES)
        .expect("bot-name patterns compile")
});

static MOBILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:hpw|i|web)os|alamofire|alcatel|amoi|android|avantgo|blackberry|blazer|cell|cfnetwork|darwin|dolfin|dolphin|fennec|htc|ip(?:hone|od|ad)|ipaq|j2me|kindle|midp|minimo|mobi|motorola|nec-|netfront|nokia|opera m(?:ob|in)i|palm|phone|pocket|portable|psp|silk-accelerated|skyfire|sony|ucbrowser|up\.browser|up\.link|windows ce|xda|zte|zune")
        .expect("mobile user-agent regex compiles")
});

static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)curl|wget|collectd|python|urllib|java|jakarta|httpclient|phpcrawl|libwww|perl|go-http|okhttp|lua-resty|winhttp|awesomium")
        .expect("script user-agent regex compiles")
});

pub fn is_bot(user_agent: &str) -> bool {
    BOT_MATCHER.is_match(user_agent)
}

pub fn is_mobile(user_agent: &str) -> bool {
    MOBILE_RE.is_match(user_agent)
}

pub fn is_script(user_agent: &str) -> bool {
    SCRIPT_RE.is_match(user_agent)
}

fn leading_major_version(version: &str) -> Option<u32> {
    let digits: String = version.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn browser_kind(name: &str) -> BrowserKind {
    match name {
        "Chrome" => BrowserKind::Chrome,
        "Internet Explorer" => BrowserKind::InternetExplorer,
        "Firefox" => BrowserKind::Firefox,
        "Safari" => BrowserKind::Safari,
        "Opera" => BrowserKind::Opera,
        "Android" => BrowserKind::AndroidBrowser,
        _ => BrowserKind::Other,
    }
}

fn is_old_browser(
    browser: BrowserKind,
    browser_major: Option<u32>,
    device_category: &str,
    os_name: &str,
    os_major: Option<u32>,
) -> bool {
    let Some(major) = browser_major else {
        return false;
    };
    match browser {
        BrowserKind::InternetExplorer => major < 16,
        BrowserKind::Chrome => {
            if device_category == "smartphone"
                && os_name == "Android"
                && os_major.unwrap_or(0) >= 8
                && major < 60
            {
                true
            } else {
                major < 50
            }
        }
        BrowserKind::Firefox => major < 60,
        BrowserKind::AndroidBrowser => major < 5,
        BrowserKind::Safari => major < 10,
        BrowserKind::Opera => major < 10,
        BrowserKind::Other => false,
    }
}

/// Parses `user_agent` and computes every derived signal in one pass.
pub fn classify(user_agent: &str) -> UserAgentInfo {
    let parsed = woothee::parser::Parser::new().parse(user_agent);

    let (browser, browser_major, os_name, os_major, device_category) = match &parsed {
        Some(result) => {
            let browser = browser_kind(result.name);
            let browser_major = leading_major_version(result.version);
            let os_major = leading_major_version(result.os_version.as_ref());
            (
                browser,
                browser_major,
                result.os.to_string(),
                os_major,
                result.category.to_string(),
            )
        }
        None => (BrowserKind::Other, None, "UNKNOWN".to_string(), None, "UNKNOWN".to_string()),
    };

    let is_old = is_old_browser(browser, browser_major, &device_category, &os_name, os_major);

    UserAgentInfo {
        browser,
        browser_major,
        os_name,
        os_major,
        device_category,
        is_mobile: is_mobile(user_agent),
        is_script: is_script(user_agent),
        is_bot: is_bot(user_agent),
        is_old,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_bot_name_is_detected() {
        assert!(is_bot("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"));
        assert!(is_bot("curl/8.0.1 AhrefsBot crawler"));
        assert!(!is_bot("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"));
    }

    #[test]
    fn script_clients_are_detected() {
        assert!(is_script("python-requests/2.28.0"));
        assert!(is_script("curl/8.0.1"));
        assert!(!is_script("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)"));
    }

    #[test]
    fn mobile_user_agents_are_detected() {
        assert!(is_mobile(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(is_mobile("Mozilla/5.0 (Linux; Android 13; Pixel 7)"));
        assert!(!is_mobile(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
        ));
    }

    #[test]
    fn old_internet_explorer_is_flagged() {
        assert!(is_old_browser(
            BrowserKind::InternetExplorer,
            Some(8),
            "pc",
            "Windows",
            None
        ));
        assert!(!is_old_browser(
            BrowserKind::InternetExplorer,
            Some(16),
            "pc",
            "Windows",
            None
        ));
    }

    #[test]
    fn old_chrome_on_modern_android_phone_is_flagged() {
        assert!(is_old_browser(
            BrowserKind::Chrome,
            Some(55),
            "smartphone",
            "Android",
            Some(9)
        ));
        assert!(!is_old_browser(
            BrowserKind::Chrome,
            Some(65),
            "smartphone",
            "Android",
            Some(9)
        ));
    }

    #[test]
    fn leading_major_version_parses_semver_like_strings() {
        assert_eq!(leading_major_version("91.0.4472.124"), Some(91));
        assert_eq!(leading_major_version("UNKNOWN"), None);
    }
}
