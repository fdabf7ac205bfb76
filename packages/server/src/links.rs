//! Domain resolution and job-link repair.
//!
//! Extracted job links are frequently relative ("/jobs/42" or "jobs/42");
//! before they leave the service, every link is anchored at the page's own
//! domain. Links that already name a host are left alone, so ATS-hosted
//! postings (Greenhouse, Lever) keep their own domain.

use url::Url;

/// Resolve the domain a page lives on, for anchoring its relative links.
///
/// Keeps the page's scheme when it has one ("https://boards.example.com"),
/// so an https page produces https job links. Schemeless input falls back to
/// a bare authority, and unparseable input yields an empty string, which
/// [`normalize_job_link`] treats as "nothing to anchor to".
pub fn domain_of(page_url: &str) -> String {
    if let Ok(url) = Url::parse(page_url) {
        return match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}://{}:{}", url.scheme(), host, port),
            (Some(host), None) => format!("{}://{}", url.scheme(), host),
            (None, _) => String::new(),
        };
    }

    // Schemeless input ("boards.example.com/careers"): parse with a
    // placeholder scheme to locate the authority, but return it bare since
    // the page never declared a real scheme.
    match Url::parse(&format!("http://{}", page_url)) {
        Ok(url) => match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        },
        Err(_) => String::new(),
    }
}

/// Rewrite a possibly-relative job link into an absolute URL on `domain`.
///
/// Links that already carry an authority are returned untouched. Everything
/// else resolves against the domain with standard base-URL join semantics:
/// leading-slash paths land at the domain root, relative paths and ".."
/// segments resolve against it. When neither the link nor the domain is
/// usable, the link comes back unchanged rather than failing the request.
///
/// Idempotent: normalizing an already-normalized link changes nothing.
pub fn normalize_job_link(link: &str, domain: &str) -> String {
    if has_authority(link) {
        return link.to_string();
    }

    // The domain needs a scheme before it can serve as a join base
    let base = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("http://{}", domain)
    };

    match Url::parse(&base).and_then(|base_url| base_url.join(link)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => link.to_string(),
    }
}

/// Whether a link already names its own host.
fn has_authority(link: &str) -> bool {
    if let Ok(parsed) = Url::parse(link) {
        return parsed.has_host();
    }
    // Scheme-relative links ("//cdn.example.com/x") carry an authority even
    // though they don't parse standalone
    link.starts_with("//")
}
