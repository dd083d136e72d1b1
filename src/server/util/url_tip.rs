use url::Url;

/// Sites whose links are routed through the redirect domain so they don't get a
/// referral click from the forum.
const NO_CLICKS_FOR_THESE_SITES: [&str; 6] = [
    "fotbolldirekt.se",
    "aftonbladet.se",
    "expressen.se",
    "aik.se",
    "aikfotboll.se",
    "hammarbyfotboll.se",
];

const REDIRECT_HOST: &str = "unv.is";

/// Href shown for a post's url tip.
///
/// Empty hrefs map to `None`. Links whose host is a denylisted site, or a
/// subdomain of one, become `{scheme}://unv.is/{host-without-www}{path}`,
/// keeping the original scheme; hrefs without a scheme are treated as https.
/// Everything else passes through unchanged.
pub fn rewrite_href(href: Option<&str>) -> Option<String> {
    let href = href.map(str::trim).filter(|h| !h.is_empty())?;

    let parsed = match Url::parse(href) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", href)).ok()
        }
        Err(_) => None,
    };

    let Some(url) = parsed.filter(|u| matches!(u.scheme(), "http" | "https")) else {
        return Some(href.to_string());
    };
    let Some(host) = url.host_str() else {
        return Some(href.to_string());
    };
    let host = host.strip_prefix("www.").unwrap_or(host);

    if !NO_CLICKS_FOR_THESE_SITES
        .iter()
        .any(|site| host == *site || host.ends_with(&format!(".{}", site)))
    {
        return Some(href.to_string());
    }

    let mut rewritten = format!("{}://{}/{}", url.scheme(), REDIRECT_HOST, host);
    if url.path() != "/" || href.ends_with('/') {
        rewritten.push_str(url.path());
    }
    if let Some(query) = url.query() {
        rewritten.push('?');
        rewritten.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        rewritten.push('#');
        rewritten.push_str(fragment);
    }

    Some(rewritten)
}
