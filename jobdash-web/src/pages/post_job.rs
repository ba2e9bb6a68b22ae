use chrono::NaiveDate;
use shared::models::{JobCategory, JobPostRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::JobDashClient;
use crate::components::toast::{Toast, use_toast};

/// Convert a `yyyy-MM-dd` form value to epoch seconds; the job collaborator
/// stores deadlines and expiries as plain seconds.
fn date_to_seconds(value: &str) -> Option<i64> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp())
}

#[function_component(PostJobPage)]
pub fn post_job_page() -> Html {
    let name = use_state(String::new);
    let description = use_state(String::new);
    let category_id = use_state(String::new);
    let pay_amount = use_state(|| 0u32);
    let time_to_complete = use_state(String::new);
    let expiry = use_state(String::new);
    let categories = use_state(Vec::<JobCategory>::new);
    let submitting = use_state(|| false);
    let toast = use_toast();

    {
        let categories = categories.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = JobDashClient::shared();
                match client.get_categories().await {
                    Ok(list) => categories.set(list),
                    Err(_) => toast.emit(Toast::error("Failed to load categories.")),
                }
            });
            || ()
        });
    }

    let onsubmit = {
        let name_handle = name.clone();
        let description_handle = description.clone();
        let category_handle = category_id.clone();
        let pay_handle = pay_amount.clone();
        let complete_handle = time_to_complete.clone();
        let expiry_handle = expiry.clone();
        let submitting_handle = submitting.clone();
        let toast = toast.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(time_to_complete_seconds), Some(expiry_seconds)) = (
                date_to_seconds(&complete_handle),
                date_to_seconds(&expiry_handle),
            ) else {
                return;
            };
            let request = JobPostRequest {
                name: (*name_handle).clone(),
                description: (*description_handle).clone(),
                category_id: (*category_handle).clone(),
                pay_amount: *pay_handle,
                time_to_complete_seconds,
                expiry_seconds,
            };
            submitting_handle.set(true);

            let name_ref = name_handle.clone();
            let description_ref = description_handle.clone();
            let category_ref = category_handle.clone();
            let pay_ref = pay_handle.clone();
            let complete_ref = complete_handle.clone();
            let expiry_ref = expiry_handle.clone();
            let submitting_ref = submitting_handle.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let client = JobDashClient::shared();
                match client.post_job(&request).await {
                    Ok(_) => {
                        toast.emit(Toast::success("Job posted successfully!"));
                        name_ref.set(String::new());
                        description_ref.set(String::new());
                        category_ref.set(String::new());
                        pay_ref.set(0);
                        complete_ref.set(String::new());
                        expiry_ref.set(String::new());
                    }
                    Err(err) => {
                        toast.emit(Toast::error(format!("Failed to post job: {err}")));
                    }
                }
                submitting_ref.set(false);
            });
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(input.value());
            }
        })
    };

    let on_category_change = {
        let category_id = category_id.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                category_id.set(select.value());
            }
        })
    };

    let on_pay_change = {
        let pay_amount = pay_amount.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                pay_amount.set(input.value().parse().unwrap_or(0));
            }
        })
    };

    let on_complete_change = {
        let time_to_complete = time_to_complete.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                time_to_complete.set(input.value());
            }
        })
    };

    let on_expiry_change = {
        let expiry = expiry.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                expiry.set(input.value());
            }
        })
    };

    let is_busy = *submitting;
    let disable_submit = (*name).is_empty()
        || (*description).is_empty()
        || (*category_id).is_empty()
        || *pay_amount < 1
        || (*time_to_complete).is_empty()
        || (*expiry).is_empty()
        || is_busy;

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Post a job"}</h1>
            <form class="card bg-base-200 shadow-xl" onsubmit={onsubmit}>
                <div class="card-body space-y-2">
                    <div class="form-control">
                        <label class="label" for="job-name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="job-name"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*name).clone()}
                            oninput={on_name_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="job-description">
                            <span class="label-text">{"Description"}</span>
                        </label>
                        <textarea
                            id="job-description"
                            class="textarea textarea-bordered"
                            required=true
                            value={(*description).clone()}
                            oninput={on_description_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="job-category">
                            <span class="label-text">{"Category"}</span>
                        </label>
                        <select
                            id="job-category"
                            class="select select-bordered"
                            required=true
                            value={(*category_id).clone()}
                            onchange={on_category_change}
                        >
                            <option value="" selected={(*category_id).is_empty()}>
                                {"Select a category"}
                            </option>
                            { for categories.iter().map(|category| html! {
                                <option
                                    value={category.category_id.clone()}
                                    selected={*category_id == category.category_id}
                                >
                                    {category.name.clone()}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="job-pay">
                            <span class="label-text">{"Pay amount"}</span>
                        </label>
                        <input
                            id="job-pay"
                            class="input input-bordered"
                            type="number"
                            min="1"
                            required=true
                            value={pay_amount.to_string()}
                            oninput={on_pay_change}
                        />
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="job-complete-by">
                                <span class="label-text">{"Complete by"}</span>
                            </label>
                            <input
                                id="job-complete-by"
                                class="input input-bordered"
                                type="date"
                                required=true
                                value={(*time_to_complete).clone()}
                                oninput={on_complete_change}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="job-expiry">
                                <span class="label-text">{"Listing expires"}</span>
                            </label>
                            <input
                                id="job-expiry"
                                class="input input-bordered"
                                type="date"
                                required=true
                                value={(*expiry).clone()}
                                oninput={on_expiry_change}
                            />
                        </div>
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Posting..." } else { "Post job" }}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_to_seconds_converts_midnight_utc() {
        assert_eq!(date_to_seconds("2025-01-02"), Some(1_735_776_000));
    }

    #[test]
    fn date_to_seconds_rejects_garbage() {
        assert_eq!(date_to_seconds("tomorrow"), None);
        assert_eq!(date_to_seconds(""), None);
    }
}
