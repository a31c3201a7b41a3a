use std::path::Path;

use anyhow::{Context, Result};

use nestedpages::application::ListingRequest;
use nestedpages::config::Config;
use nestedpages::infrastructure::JsonSiteRepository;
use nestedpages::presentation::{create_listing_use_case, output, OutputFormat};

/// Raw request parameters as given on the command line
pub struct RenderArgs<'a> {
    pub post_type: &'a str,
    pub orderby: Option<&'a str>,
    pub order: Option<&'a str>,
    pub author: Option<&'a str>,
    pub search: Option<&'a str>,
    pub category: Option<&'a str>,
}

impl RenderArgs<'_> {
    fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("orderby", self.orderby),
            ("order", self.order),
            ("author", self.author),
            ("search", self.search),
            ("category", self.category),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

pub fn cmd_render(site: &Path, args: &RenderArgs<'_>, config: &Config, format: OutputFormat) -> Result<()> {
    let site = JsonSiteRepository::new(site)
        .load()
        .with_context(|| format!("loading site snapshot {}", site.display()))?;

    let use_case = create_listing_use_case(&site.content, config, args.post_type)?;
    let request = ListingRequest::from_params(args.params());
    let listing = use_case.render(&request);

    match format {
        OutputFormat::Json => println!("{}", output::listing_json(args.post_type, &listing)),
        OutputFormat::Text => print!("{}", listing.to_html()),
    }
    Ok(())
}
