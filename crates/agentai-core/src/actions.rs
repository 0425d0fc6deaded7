/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Static registry of Agent.ai action identifiers and their endpoints
//!
//! Identifiers are the camelCase names callers use (`invokeLlm`); endpoints
//! are the snake_case path suffixes appended to the base URL
//! (`/action/invoke_llm`). The table is process-wide constant data.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Every supported action, in registry order
pub const ACTION_ENDPOINTS: &[(&str, &str)] = &[
  ("grabWebText", "/action/grab_web_text"),
  ("grabWebScreenshot", "/action/grab_web_screenshot"),
  ("getYoutubeTranscript", "/action/get_youtube_transcript"),
  ("getYoutubeChannel", "/action/get_youtube_channel"),
  ("getTwitterUsers", "/action/get_twitter_users"),
  ("getGoogleNews", "/action/get_google_news"),
  ("runYoutubeSearch", "/action/run_youtube_search"),
  ("getSearchResults", "/action/get_search_results"),
  ("getRecentTweets", "/action/get_recent_tweets"),
  ("getLinkedinProfile", "/action/get_linkedin_profile"),
  ("getLinkedinActivity", "/action/get_linkedin_activity"),
  ("getCompanyObject", "/action/get_company_object"),
  ("getBlueskyPosts", "/action/get_bluesky_posts"),
  ("searchBlueskyPosts", "/action/search_bluesky_posts"),
  ("getInstagramProfile", "/action/get_instagram_profile"),
  ("getInstagramFollowers", "/action/get_instagram_followers"),
  ("outputAudio", "/action/output_audio"),
  ("invokeLlm", "/action/invoke_llm"),
  ("generateImage", "/action/generate_image"),
  ("storeVariableToDatabase", "/action/store_variable_to_database"),
  ("getVariableFromDatabase", "/action/get_variable_from_database"),
  ("invokeAgent", "/action/invoke_agent"),
  ("restCall", "/action/rest_call"),
  ("convertFile", "/action/convert_file"),
  ("convertFileOptions", "/action/convert_file_options"),
];

/// Action id used by `chat`
pub const INVOKE_LLM: &str = "invokeLlm";

static INDEX: LazyLock<HashMap<&'static str, &'static str>> =
  LazyLock::new(|| ACTION_ENDPOINTS.iter().copied().collect());

/// Read-only view over [`ACTION_ENDPOINTS`]
///
/// Lookups are exact and case-sensitive: `invokeLlm` resolves, `InvokeLlm`
/// and `invoke_llm` do not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionRegistry;

impl ActionRegistry {
  /// Endpoint path for `action_id`, if registered
  pub fn endpoint(&self, action_id: &str) -> Option<&'static str> {
    INDEX.get(action_id).copied()
  }

  pub fn contains(&self, action_id: &str) -> bool {
    INDEX.contains_key(action_id)
  }

  /// `(id, path)` pairs in registry order
  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
    ACTION_ENDPOINTS.iter().copied()
  }

  pub fn ids(&self) -> impl Iterator<Item = &'static str> {
    self.iter().map(|(id, _)| id)
  }

  pub fn len(&self) -> usize {
    ACTION_ENDPOINTS.len()
  }

  pub fn is_empty(&self) -> bool {
    ACTION_ENDPOINTS.is_empty()
  }
}
