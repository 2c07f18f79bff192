use crate::s3w::{BucketRegion, PageRequest, SObject, StorageProvider};
use crate::{Error, Result};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, warn};

/// Forward only sequence of the objects of one bucket.
///
/// Holds at most one page. The next page is requested only when the current one is
/// consumed, and empty pages are skipped. After the end or an error, `next_object`
/// returns `Ok(None)`.
pub struct ObjectPager<'a, P: StorageProvider + ?Sized> {
	provider: &'a P,
	bucket: String,
	region: BucketRegion,
	prefix: Option<String>,
	buffer: VecDeque<SObject>,
	continuation_token: Option<String>,
	/// Tokens already used for this listing. A token coming back means a loop.
	seen_tokens: HashSet<String>,
	pages_fetched: usize,
	done: bool,
}

impl<'a, P: StorageProvider + ?Sized> ObjectPager<'a, P> {
	/// An empty prefix is the same as no prefix.
	pub fn new(provider: &'a P, bucket: &str, region: BucketRegion, prefix: Option<&str>) -> Result<Self> {
		if bucket.is_empty() {
			return Err(Error::EmptyBucketName);
		}

		Ok(ObjectPager {
			provider,
			bucket: bucket.to_string(),
			region,
			prefix: prefix.filter(|p| !p.is_empty()).map(String::from),
			buffer: VecDeque::new(),
			continuation_token: None,
			seen_tokens: HashSet::new(),
			pages_fetched: 0,
			done: false,
		})
	}

	pub async fn next_object(&mut self) -> Result<Option<SObject>> {
		loop {
			if let Some(obj) = self.buffer.pop_front() {
				return Ok(Some(obj));
			}
			if self.done {
				return Ok(None);
			}
			self.fetch_page().await?;
		}
	}

	pub fn pages_fetched(&self) -> usize {
		self.pages_fetched
	}

	async fn fetch_page(&mut self) -> Result<()> {
		let req = PageRequest {
			bucket: &self.bucket,
			region: &self.region,
			prefix: self.prefix.as_deref(),
			continuation_token: self.continuation_token.as_deref(),
		};

		let page = match self.provider.list_objects_page(&req).await {
			Ok(page) => page,
			Err(err) => {
				self.done = true;
				return Err(err);
			}
		};
		self.pages_fetched += 1;

		debug!(
			bucket = %self.bucket,
			page = self.pages_fetched,
			objects = page.objects.len(),
			"object page fetched"
		);

		let next_token = page.next_continuation_token.filter(|t| !t.is_empty());
		if let Some(current) = self.continuation_token.take() {
			self.seen_tokens.insert(current);
		}
		self.done = match &next_token {
			None => true,
			Some(next) if self.seen_tokens.contains(next) => {
				warn!(bucket = %self.bucket, token = %next, "listing returned an already used continuation token, stopping");
				true
			}
			Some(_) => false,
		};
		self.continuation_token = next_token;
		self.buffer.extend(page.objects);

		Ok(())
	}
}
