//! Page-token pagination over the API's list endpoints.
//!
//! Every YouTube list response carries an optional `nextPageToken`; the next
//! request passes it back as `pageToken`. The loop here drives any page
//! operation to exhaustion: start with no token, append each page's items,
//! stop when a response carries no token. The token only lives inside one
//! loop — it is never persisted.

use std::future::Future;

use crate::error::YoutubeError;

/// One page of a listing: the items plus the continuation cursor. `None`
/// means this was the last page.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

/// Drives `fetch_page` until a page comes back without a continuation token,
/// concatenating items in arrival order. Exactly one call is made per page.
///
/// **All-or-nothing semantics**: on any page failure, items from earlier
/// pages are discarded and the error is returned. There is no retry.
///
/// # Errors
///
/// Propagates the first error `fetch_page` returns.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, YoutubeError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, YoutubeError>>,
{
    let mut items: Vec<T> = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = fetch_page(page_token.clone()).await?;
        items.extend(page.items);

        page_token = page.next_page_token;
        if page_token.is_none() {
            break;
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[tokio::test]
    async fn concatenates_pages_and_stops_when_token_absent() {
        let calls: RefCell<Vec<Option<String>>> = RefCell::new(Vec::new());

        let result = fetch_all_pages(|token| {
            calls.borrow_mut().push(token.clone());
            let page = if token.is_none() {
                Page {
                    items: vec![1, 2],
                    next_page_token: Some("t2".to_string()),
                }
            } else {
                Page {
                    items: vec![3],
                    next_page_token: None,
                }
            };
            async move { Ok::<_, YoutubeError>(page) }
        })
        .await
        .expect("pagination should succeed");

        assert_eq!(result, vec![1, 2, 3]);
        assert_eq!(
            *calls.borrow(),
            vec![None, Some("t2".to_string())],
            "expected exactly two calls: first without a token, then with t2"
        );
    }

    #[tokio::test]
    async fn single_page_without_token_makes_one_call() {
        let calls = RefCell::new(0_u32);

        let result = fetch_all_pages(|_token| {
            *calls.borrow_mut() += 1;
            async {
                Ok::<_, YoutubeError>(Page {
                    items: vec!["only"],
                    next_page_token: None,
                })
            }
        })
        .await
        .expect("pagination should succeed");

        assert_eq!(result, vec!["only"]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn empty_first_page_yields_empty_vec() {
        let result = fetch_all_pages(|_token| async {
            Ok::<_, YoutubeError>(Page {
                items: Vec::<String>::new(),
                next_page_token: None,
            })
        })
        .await
        .expect("pagination should succeed");

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn error_on_a_later_page_discards_earlier_items() {
        let result: Result<Vec<i32>, _> = fetch_all_pages(|token| {
            let page = if token.is_none() {
                Ok(Page {
                    items: vec![1],
                    next_page_token: Some("t2".to_string()),
                })
            } else {
                Err(YoutubeError::Api("quota exceeded".to_string()))
            };
            async move { page }
        })
        .await;

        let err = result.expect_err("second page should fail the whole fetch");
        assert!(
            err.to_string().contains("quota exceeded"),
            "unexpected error: {err}"
        );
    }
}
