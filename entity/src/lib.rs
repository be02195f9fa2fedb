pub mod user;

/*
 Accounts log in with their email but are displayed by username.
 Privilege is a pair of flags rather than role rows: is_staff gates the
 admin surface, is_superuser passes every permission check. Both flags
 are fixed at creation time by the registry, never inferred.
 */
