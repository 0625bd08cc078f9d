//! SQL text of the export queries
//!
//! All five queries are read-only and take no parameters. Column aliases are
//! the names the row decoders look up.

/// Latest indexed block, NULL when the block table is empty
pub const BLOCK: &str = r#"
    select max(number) as block from block
"#;

/// Every signup; a signup without a token is an organization
pub const SIGNUPS: &str = r#"
    select s."user" as safe_address
         , s.token is null as is_orga
    from crc_all_signups s
"#;

/// Trust edges where the signed-up safe is the one accepting tokens
pub const INCOMING_TRUSTS: &str = r#"
    select s."user" = tc."user" as is_identity
         , s."user" as "canSendToAddress"
         , tc."user" as "userAddress"
         , tc."limit"
    from crc_all_signups s
             join cache_crc_current_trust tc on tc."can_send_to" = s."user"
"#;

/// Trust edges where the signed-up safe is the one being trusted
pub const OUTGOING_TRUSTS: &str = r#"
    select s."user" = tc."can_send_to" as is_identity
         , tc."can_send_to" as "canSendToAddress"
         , tc."user" as "userAddress"
         , tc."limit"
    from crc_all_signups s
             join cache_crc_current_trust tc on tc."user" = s."user"
"#;

/// Balances per signed-up safe and token; the amount stays text
pub const BALANCES: &str = r#"
    select s."user" as safe_address
         , b.token
         , b.token_owner
         , b.balance::text as amount
    from crc_all_signups s
             join cache_crc_balances_by_safe_and_token b on b.safe_address = s."user"
"#;
