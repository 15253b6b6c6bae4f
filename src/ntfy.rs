use core::fmt::{self, Write};
use heapless::String;
use log::{debug, warn};

use crate::config::Config;
use crate::constants::{NTFY_TOPIC_MAX_LEN, NTFY_URL_MAX_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    TopicEmpty,
    TopicTooLong,
    TopicInvalidChar(char),
    ServerEmpty,
    UrlTooLong,
}

/// A topic name the ntfy relay accepts: 1 to 64 characters of `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic<'a>(&'a str);

impl<'a> Topic<'a> {
    pub fn new(name: &'a str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::TopicEmpty);
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(Error::TopicInvalidChar(c));
        }
        if name.len() > NTFY_TOPIC_MAX_LEN {
            return Err(Error::TopicTooLong);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl Topic<'static> {
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(config.ntfy_topic).inspect_err(|e| {
            warn!("Invalid ntfy topic {:?}: {:?}", config.ntfy_topic, e);
        })
    }
}

impl fmt::Display for Topic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Builds the URL an alert is POSTed to: `<server>/<topic>`.
pub fn publish_url(server: &str, topic: &Topic<'_>) -> Result<String<NTFY_URL_MAX_LEN>, Error> {
    let server = server.trim_end_matches('/');
    if server.is_empty() {
        return Err(Error::ServerEmpty);
    }

    let mut url: String<NTFY_URL_MAX_LEN> = String::new();
    write!(url, "{}/{}", server, topic).map_err(|_| Error::UrlTooLong)?;

    debug!("ntfy publish URL: {}", url);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_topic_charset() {
        let topic = Topic::new("alerts-1_Kitchen").unwrap();
        assert_eq!(topic.as_str(), "alerts-1_Kitchen");
    }

    #[test]
    fn rejects_bad_topics() {
        assert_eq!(Topic::new(""), Err(Error::TopicEmpty));
        assert_eq!(Topic::new("my topic"), Err(Error::TopicInvalidChar(' ')));
        assert_eq!(Topic::new("a/b"), Err(Error::TopicInvalidChar('/')));
        assert_eq!(Topic::new("température"), Err(Error::TopicInvalidChar('é')));

        let longest = "t".repeat(NTFY_TOPIC_MAX_LEN);
        assert!(Topic::new(&longest).is_ok());
        let too_long = "t".repeat(NTFY_TOPIC_MAX_LEN + 1);
        assert_eq!(Topic::new(&too_long), Err(Error::TopicTooLong));
    }

    #[test]
    fn builds_publish_url() {
        let topic = Topic::new("alerts-1").unwrap();
        let url = publish_url("https://ntfy.sh", &topic).unwrap();
        assert_eq!(url.as_str(), "https://ntfy.sh/alerts-1");
    }

    #[test]
    fn drops_trailing_slash() {
        let topic = Topic::new("alerts-1").unwrap();
        let url = publish_url("https://ntfy.example.com/", &topic).unwrap();
        assert_eq!(url.as_str(), "https://ntfy.example.com/alerts-1");
    }

    #[test]
    fn rejects_empty_server() {
        let topic = Topic::new("alerts-1").unwrap();
        assert_eq!(publish_url("", &topic), Err(Error::ServerEmpty));
        assert_eq!(publish_url("/", &topic), Err(Error::ServerEmpty));
    }

    #[test]
    fn url_must_fit_buffer() {
        let topic = Topic::new("alerts-1").unwrap();
        let server = format!("https://{}", "h".repeat(NTFY_URL_MAX_LEN));
        assert_eq!(publish_url(&server, &topic), Err(Error::UrlTooLong));
    }
}
