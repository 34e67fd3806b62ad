mod builder;

pub use builder::{
    APPROVAL_MARKER, COPYWRITER_ROLE_PROMPT, REVIEWER_ROLE_PROMPT, ROUTER_ROLE_PROMPT,
    build_copywriter_system_prompt, build_copywriter_user_prompt, build_review_prompt,
    build_router_prompt,
};
